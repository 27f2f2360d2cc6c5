//! Capability queries. Answered from fixed tables, never from the driver.

use crate::args::Arg;
use crate::args::normalize::{string, uint};
use crate::caps::{self, ContextAttributes, Extension, ParamValue, PrecisionFormat};
use crate::driver::GlDriver;

use super::WebGl2;

impl<D: GlDriver> WebGl2<D> {
    pub fn get_parameter(&self, pname: Arg<'_>) -> ParamValue {
        caps::parameter(uint(pname, 0))
    }

    pub fn get_extension(&self, name: Arg<'_>) -> Option<Extension> {
        let found = caps::extension(string(name));
        if found.is_none() {
            log::debug!("getExtension: {:?} is not supported", string(name));
        }
        found
    }

    pub fn get_supported_extensions(&self) -> Vec<&'static str> {
        caps::supported_extensions()
    }

    pub fn get_context_attributes(&self) -> ContextAttributes {
        caps::CONTEXT_ATTRIBUTES
    }

    pub fn get_shader_precision_format(&self, _shader_type: Arg<'_>, _precision_type: Arg<'_>) -> PrecisionFormat {
        caps::PRECISION_FORMAT
    }
}
