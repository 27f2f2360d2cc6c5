//! Query objects, sampler parameters and transform feedback.
//!
//! Every entry point here lives in a version module and returns `Result`.

use crate::args::Arg;
use crate::args::normalize::{enum_or, float, handle, int, strings, uint};
use crate::consts;
use crate::driver::{ActiveInfo, GlCmd, GlDriver};
use crate::error::BridgeError;

use super::value::FLOAT_PNAMES;
use super::{Value, WebGl2};

impl<D: GlDriver> WebGl2<D> {
    // ── queries ──────────────────────────────────────────────────────────

    pub fn begin_query(&mut self, target: Arg<'_>, query: Arg<'_>) -> Result<(), BridgeError> {
        self.gl
            .submit(GlCmd::BeginQuery {
                target: enum_or(target, consts::ANY_SAMPLES_PASSED),
                query: handle(query),
            })
            .map(drop)
    }

    pub fn end_query(&mut self, target: Arg<'_>) -> Result<(), BridgeError> {
        self.gl
            .submit(GlCmd::EndQuery(enum_or(target, consts::ANY_SAMPLES_PASSED)))
            .map(drop)
    }

    /// The active query of `target`, `0` when none.
    pub fn get_query(&mut self, target: Arg<'_>, pname: Arg<'_>) -> Result<u32, BridgeError> {
        Ok(self
            .gl
            .submit(GlCmd::GetQuery {
                target: enum_or(target, consts::ANY_SAMPLES_PASSED),
                pname: enum_or(pname, consts::CURRENT_QUERY),
            })?
            .uint())
    }

    /// `QUERY_RESULT_AVAILABLE` answers a boolean, `QUERY_RESULT` a count.
    pub fn get_query_parameter(&mut self, query: Arg<'_>, pname: Arg<'_>) -> Result<Value, BridgeError> {
        let pname = enum_or(pname, consts::QUERY_RESULT);
        let reply = self.gl.submit(GlCmd::GetQueryParameter {
            query: handle(query),
            pname,
        })?;
        Ok(Value::from_reply(pname, reply))
    }

    // ── sampler parameters ───────────────────────────────────────────────

    pub fn sampler_parameteri(&mut self, sampler: Arg<'_>, pname: Arg<'_>, param: Arg<'_>) -> Result<(), BridgeError> {
        self.gl
            .submit(GlCmd::SamplerParameterI {
                sampler: handle(sampler),
                pname: uint(pname, 0),
                param: int(param, 0),
            })
            .map(drop)
    }

    pub fn sampler_parameterf(&mut self, sampler: Arg<'_>, pname: Arg<'_>, param: Arg<'_>) -> Result<(), BridgeError> {
        self.gl
            .submit(GlCmd::SamplerParameterF {
                sampler: handle(sampler),
                pname: uint(pname, 0),
                param: float(param, 0.0),
            })
            .map(drop)
    }

    pub fn get_sampler_parameter(&mut self, sampler: Arg<'_>, pname: Arg<'_>) -> Result<Value, BridgeError> {
        let sampler = handle(sampler);
        let pname = uint(pname, 0);
        let cmd = if FLOAT_PNAMES.contains(&pname) {
            GlCmd::GetSamplerParameterF { sampler, pname }
        } else {
            GlCmd::GetSamplerParameterI { sampler, pname }
        };
        Ok(Value::from_reply(pname, self.gl.submit(cmd)?))
    }

    // ── transform feedback ───────────────────────────────────────────────

    /// Defaults: `POINTS`.
    pub fn begin_transform_feedback(&mut self, primitive_mode: Arg<'_>) -> Result<(), BridgeError> {
        self.gl
            .submit(GlCmd::BeginTransformFeedback(uint(primitive_mode, consts::POINTS)))
            .map(drop)
    }

    pub fn end_transform_feedback(&mut self) -> Result<(), BridgeError> {
        self.gl.submit(GlCmd::EndTransformFeedback).map(drop)
    }

    pub fn pause_transform_feedback(&mut self) -> Result<(), BridgeError> {
        self.gl.submit(GlCmd::PauseTransformFeedback).map(drop)
    }

    pub fn resume_transform_feedback(&mut self) -> Result<(), BridgeError> {
        self.gl.submit(GlCmd::ResumeTransformFeedback).map(drop)
    }

    /// Defaults: `INTERLEAVED_ATTRIBS`.
    pub fn transform_feedback_varyings(
        &mut self,
        program: Arg<'_>,
        varyings: Arg<'_>,
        buffer_mode: Arg<'_>,
    ) -> Result<(), BridgeError> {
        self.gl
            .submit(GlCmd::TransformFeedbackVaryings {
                program: handle(program),
                varyings: strings(varyings).iter().map(|s| (*s).to_owned()).collect(),
                buffer_mode: enum_or(buffer_mode, consts::INTERLEAVED_ATTRIBS),
            })
            .map(drop)
    }

    pub fn get_transform_feedback_varying(
        &mut self,
        program: Arg<'_>,
        index: Arg<'_>,
    ) -> Result<Option<ActiveInfo>, BridgeError> {
        Ok(self
            .gl
            .submit(GlCmd::GetTransformFeedbackVarying {
                program: handle(program),
                index: uint(index, 0),
            })?
            .into_active())
    }
}

#[cfg(test)]
mod tests {
    use crate::args::Arg;
    use crate::consts;
    use crate::driver::{ActiveInfo, GlCmd, GlReply, GlVersion};
    use crate::surface::Value;
    use crate::surface::testing::{calls, context, driver};

    const NONE: Arg<'static> = Arg::Absent;

    #[test]
    fn occlusion_query_cycle() {
        let mut gl = context();
        let query = gl.create_query().unwrap();
        gl.begin_query(NONE, Arg::Handle(query)).unwrap();
        gl.end_query(NONE).unwrap();
        driver(&mut gl).reply_with("getQueryParameter", GlReply::Uint(1));
        assert_eq!(
            gl.get_query_parameter(Arg::Handle(query), consts::QUERY_RESULT_AVAILABLE.into()),
            Ok(Value::Bool(true))
        );
        assert_eq!(gl.get_query_parameter(Arg::Handle(query), NONE), Ok(Value::Uint(1)));
        assert_eq!(driver(&mut gl).loads, vec![GlVersion::Gl15]);
        assert_eq!(
            calls(&gl)[1],
            GlCmd::BeginQuery { target: consts::ANY_SAMPLES_PASSED, query }
        );
    }

    #[test]
    fn queries_fail_cleanly_without_their_module() {
        let mut gl = context();
        driver(&mut gl).refuse(GlVersion::Gl15);
        assert!(gl.create_query().is_err());
        assert!(gl.begin_query(NONE, Arg::Handle(1)).is_err());
        assert!(gl.get_query(NONE, NONE).is_err());
        assert!(calls(&gl).is_empty());
    }

    #[test]
    fn sampler_float_parameters_use_the_float_getter() {
        let mut gl = context();
        let sampler = gl.create_sampler().unwrap();
        gl.sampler_parameterf(Arg::Handle(sampler), 0x813Bu32.into(), 4.5f32.into()).unwrap();
        gl.get_sampler_parameter(Arg::Handle(sampler), 0x813Bu32.into()).unwrap();
        assert!(matches!(calls(&gl).last(), Some(GlCmd::GetSamplerParameterF { .. })));
    }

    #[test]
    fn varyings_are_copied_in_order() {
        let mut gl = context();
        let names = ["v_pos", "v_vel"];
        gl.transform_feedback_varyings(Arg::Handle(2), names[..].into(), NONE).unwrap();
        assert_eq!(
            calls(&gl),
            &[GlCmd::TransformFeedbackVaryings {
                program: 2,
                varyings: vec!["v_pos".to_owned(), "v_vel".to_owned()],
                buffer_mode: consts::INTERLEAVED_ATTRIBS,
            }]
        );
    }

    #[test]
    fn pause_needs_the_4_0_module_only() {
        let mut gl = context();
        driver(&mut gl).refuse(GlVersion::Gl40);
        gl.begin_transform_feedback(consts::TRIANGLES.into()).unwrap();
        assert!(gl.pause_transform_feedback().is_err());
        gl.end_transform_feedback().unwrap();
        assert_eq!(driver(&mut gl).count("pauseTransformFeedback"), 0);
    }

    #[test]
    fn varying_info_is_forwarded() {
        let mut gl = context();
        let info = ActiveInfo {
            name: "v_pos".to_owned(),
            size: 1,
            ty: 0x8B51,
        };
        driver(&mut gl).reply_with("getTransformFeedbackVarying", GlReply::Active(info.clone()));
        assert_eq!(
            gl.get_transform_feedback_varying(Arg::Handle(2), NONE),
            Ok(Some(info))
        );
    }
}
