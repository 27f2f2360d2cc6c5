use glbridge::driver::GlVersion;

/// Probes the entry points of `version` in the loaded function table.
///
/// A module counts as available only if every pointer it needs resolved.
pub(crate) fn is_loaded(version: GlVersion) -> bool {
    match version {
        GlVersion::Gl15 => {
            gl::GenQueries::is_loaded()
                && gl::BeginQuery::is_loaded()
                && gl::EndQuery::is_loaded()
                && gl::GetQueryiv::is_loaded()
                && gl::GetQueryObjectuiv::is_loaded()
        }
        GlVersion::Gl30 => {
            gl::BindBufferBase::is_loaded()
                && gl::BindBufferRange::is_loaded()
                && gl::Uniform1ui::is_loaded()
                && gl::VertexAttribIPointer::is_loaded()
                && gl::ClearBufferfv::is_loaded()
                && gl::BlitFramebuffer::is_loaded()
                && gl::RenderbufferStorageMultisample::is_loaded()
                && gl::BeginTransformFeedback::is_loaded()
                && gl::TransformFeedbackVaryings::is_loaded()
                && gl::GetIntegeri_v::is_loaded()
        }
        GlVersion::Gl31 => {
            gl::DrawArraysInstanced::is_loaded()
                && gl::DrawElementsInstanced::is_loaded()
                && gl::CopyBufferSubData::is_loaded()
                && gl::UniformBlockBinding::is_loaded()
                && gl::GetUniformIndices::is_loaded()
        }
        GlVersion::Gl32 => {
            gl::FenceSync::is_loaded()
                && gl::ClientWaitSync::is_loaded()
                && gl::WaitSync::is_loaded()
                && gl::GetSynciv::is_loaded()
        }
        GlVersion::Gl33 => {
            gl::GenSamplers::is_loaded()
                && gl::BindSampler::is_loaded()
                && gl::SamplerParameteri::is_loaded()
                && gl::VertexAttribDivisor::is_loaded()
        }
        GlVersion::Gl40 => {
            gl::GenTransformFeedbacks::is_loaded()
                && gl::BindTransformFeedback::is_loaded()
                && gl::PauseTransformFeedback::is_loaded()
                && gl::ResumeTransformFeedback::is_loaded()
        }
        GlVersion::Gl42 => {
            gl::TexStorage2D::is_loaded() && gl::TexStorage3D::is_loaded() && gl::GetInternalformativ::is_loaded()
        }
        GlVersion::Gl43 => gl::InvalidateFramebuffer::is_loaded() && gl::InvalidateSubFramebuffer::is_loaded(),
    }
}
