use crate::args::Arg;
use crate::args::normalize::{handle, string, uint};
use crate::driver::{ActiveInfo, GlCmd, GlDriver, GlReply};
use crate::error::BridgeError;
use crate::shader::{ShaderStage, transpile};

use super::{Value, WebGl2};

impl<D: GlDriver> WebGl2<D> {
    /// Rewrites `source` to the host dialect before handing it over.
    ///
    /// The stage comes from `createShader`. Shaders this context did not
    /// create are treated as vertex shaders; fragment outputs are still
    /// detected from the source itself.
    pub fn shader_source(&mut self, shader: Arg<'_>, source: Arg<'_>) {
        let shader = handle(shader);
        let stage = self
            .shader_stages
            .get(&shader)
            .copied()
            .unwrap_or(ShaderStage::Vertex);
        let source = transpile(string(source), stage, self.config.platform);
        self.gl.call(GlCmd::ShaderSource { shader, source });
    }

    pub fn compile_shader(&mut self, shader: Arg<'_>) {
        self.gl.call(GlCmd::CompileShader(handle(shader)));
    }

    pub fn get_shader_parameter(&mut self, shader: Arg<'_>, pname: Arg<'_>) -> Value {
        let pname = uint(pname, 0);
        let reply = self.gl.call(GlCmd::GetShaderParameter {
            shader: handle(shader),
            pname,
        });
        Value::from_reply(pname, reply)
    }

    /// Forwarded verbatim from the driver.
    pub fn get_shader_info_log(&mut self, shader: Arg<'_>) -> String {
        self.gl.call(GlCmd::GetShaderInfoLog(handle(shader))).into_text()
    }

    pub fn attach_shader(&mut self, program: Arg<'_>, shader: Arg<'_>) {
        self.gl.call(GlCmd::AttachShader {
            program: handle(program),
            shader: handle(shader),
        });
    }

    pub fn detach_shader(&mut self, program: Arg<'_>, shader: Arg<'_>) {
        self.gl.call(GlCmd::DetachShader {
            program: handle(program),
            shader: handle(shader),
        });
    }

    pub fn link_program(&mut self, program: Arg<'_>) {
        self.gl.call(GlCmd::LinkProgram(handle(program)));
    }

    pub fn validate_program(&mut self, program: Arg<'_>) {
        self.gl.call(GlCmd::ValidateProgram(handle(program)));
    }

    pub fn get_program_parameter(&mut self, program: Arg<'_>, pname: Arg<'_>) -> Value {
        let pname = uint(pname, 0);
        let reply = self.gl.call(GlCmd::GetProgramParameter {
            program: handle(program),
            pname,
        });
        Value::from_reply(pname, reply)
    }

    pub fn get_program_info_log(&mut self, program: Arg<'_>) -> String {
        self.gl.call(GlCmd::GetProgramInfoLog(handle(program))).into_text()
    }

    // ── reflection ───────────────────────────────────────────────────────

    pub fn bind_attrib_location(&mut self, program: Arg<'_>, index: Arg<'_>, name: Arg<'_>) {
        self.gl.call(GlCmd::BindAttribLocation {
            program: handle(program),
            index: uint(index, 0),
            name: string(name).to_owned(),
        });
    }

    /// `-1` when the program has no such attribute.
    pub fn get_attrib_location(&mut self, program: Arg<'_>, name: Arg<'_>) -> i32 {
        let reply = self.gl.call(GlCmd::GetAttribLocation {
            program: handle(program),
            name: string(name).to_owned(),
        });
        match reply {
            GlReply::Unit => -1,
            reply => reply.int(),
        }
    }

    /// `None` when the program has no active uniform called `name`.
    ///
    /// Pass the result straight back as a location argument: `None`
    /// becomes `null`, which addresses no uniform.
    pub fn get_uniform_location(&mut self, program: Arg<'_>, name: Arg<'_>) -> Option<i32> {
        let reply = self.gl.call(GlCmd::GetUniformLocation {
            program: handle(program),
            name: string(name).to_owned(),
        });
        match reply {
            GlReply::Unit => None,
            reply => Some(reply.int()).filter(|&loc| loc >= 0),
        }
    }

    pub fn get_active_attrib(&mut self, program: Arg<'_>, index: Arg<'_>) -> Option<ActiveInfo> {
        self.gl
            .call(GlCmd::GetActiveAttrib {
                program: handle(program),
                index: uint(index, 0),
            })
            .into_active()
    }

    pub fn get_active_uniform(&mut self, program: Arg<'_>, index: Arg<'_>) -> Option<ActiveInfo> {
        self.gl
            .call(GlCmd::GetActiveUniform {
                program: handle(program),
                index: uint(index, 0),
            })
            .into_active()
    }

    pub fn get_frag_data_location(
        &mut self,
        program: Arg<'_>,
        name: Arg<'_>,
    ) -> Result<i32, BridgeError> {
        Ok(self
            .gl
            .submit(GlCmd::GetFragDataLocation {
                program: handle(program),
                name: string(name).to_owned(),
            })?
            .int())
    }
}

#[cfg(test)]
mod tests {
    use crate::BridgeConfig;
    use crate::args::Arg;
    use crate::consts;
    use crate::driver::recording::RecordingDriver;
    use crate::driver::{GlCmd, GlReply};
    use crate::shader::Platform;
    use crate::surface::testing::{calls, driver};
    use crate::surface::{Value, WebGl2};

    fn context_on(platform: Platform) -> WebGl2<RecordingDriver> {
        WebGl2::with_config(
            RecordingDriver::new(),
            BridgeConfig {
                platform,
                ..BridgeConfig::default()
            },
        )
    }

    fn uploaded(gl: &WebGl2<RecordingDriver>) -> &str {
        match calls(gl).last() {
            Some(GlCmd::ShaderSource { source, .. }) => source,
            other => panic!("expected shaderSource, got {other:?}"),
        }
    }

    #[test]
    fn fragment_sources_are_rewritten_for_the_stage() {
        let mut gl = context_on(Platform::MacOs);
        let fs = gl.create_shader(consts::FRAGMENT_SHADER.into());
        gl.shader_source(
            Arg::Handle(fs),
            "#version 300 es\nprecision mediump float;\nvarying vec2 uv;\nvoid main(){ gl_FragColor = vec4(uv, 0.0, 1.0); }"
                .into(),
        );

        let out = uploaded(&gl);
        assert!(out.starts_with("#version 330 core"));
        assert!(out.contains("in vec2 uv;"));
        assert!(!out.contains("gl_FragColor"));
        assert!(!out.contains("precision"));
    }

    #[test]
    fn vertex_varyings_become_outputs() {
        let mut gl = context_on(Platform::MacOs);
        let vs = gl.create_shader(consts::VERTEX_SHADER.into());
        gl.shader_source(
            Arg::Handle(vs),
            "#version 300 es\nattribute vec3 pos;\nvarying vec2 uv;\nvoid main(){}".into(),
        );

        let out = uploaded(&gl);
        assert!(out.contains("in vec3 pos;"));
        assert!(out.contains("out vec2 uv;"));
    }

    #[test]
    fn missing_source_uploads_empty_text() {
        let mut gl = context_on(Platform::Linux);
        gl.shader_source(Arg::Handle(3), Arg::Absent);
        assert_eq!(uploaded(&gl), "");
    }

    #[test]
    fn status_queries_answer_booleans() {
        let mut gl = context_on(Platform::Linux);
        driver(&mut gl).reply_with("getShaderParameter", GlReply::Int(1));
        assert_eq!(
            gl.get_shader_parameter(Arg::Handle(1), consts::COMPILE_STATUS.into()),
            Value::Bool(true)
        );
        assert_eq!(
            gl.get_shader_parameter(Arg::Handle(1), consts::SHADER_TYPE.into()),
            Value::Int(1)
        );
    }

    #[test]
    fn info_logs_are_forwarded_verbatim() {
        let mut gl = context_on(Platform::Linux);
        let log = "0:3(12): error: syntax error, unexpected ')'";
        driver(&mut gl).reply_with("getProgramInfoLog", GlReply::Text(log.to_owned()));
        assert_eq!(gl.get_program_info_log(Arg::Handle(1)), log);
    }

    #[test]
    fn uniform_locations() {
        let mut gl = context_on(Platform::Linux);
        driver(&mut gl).reply_with("getUniformLocation", GlReply::Int(-1));
        assert_eq!(gl.get_uniform_location(Arg::Handle(1), "missing".into()), None);

        driver(&mut gl).reply_with("getUniformLocation", GlReply::Int(0));
        assert_eq!(gl.get_uniform_location(Arg::Handle(1), "tint".into()), Some(0));
        assert_eq!(
            calls(&gl).last(),
            Some(&GlCmd::GetUniformLocation {
                program: 1,
                name: "tint".to_owned(),
            })
        );
    }

    #[test]
    fn unknown_attributes_report_minus_one() {
        let mut gl = context_on(Platform::Linux);
        assert_eq!(gl.get_attrib_location(Arg::Handle(1), "pos".into()), -1);
    }
}
