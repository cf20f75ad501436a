use crate::transcript::Transcript;

/// Opaque conversational collaborator: system prompt plus transcript in,
/// free text out. Transport, auth and model choice live behind this seam.
pub trait ChatBackend {
    fn chat(&self, system_prompt: &str, transcript: &Transcript) -> anyhow::Result<String>;
}

/// Run the backend and fold any failure into a diagnostic text reply.
/// Assistant availability must never surface as a structured error to the
/// surrounding application.
pub fn reply_or_diagnostic(
    backend: &dyn ChatBackend,
    system_prompt: &str,
    transcript: &Transcript,
) -> String {
    match backend.chat(system_prompt, transcript) {
        Ok(reply) => reply,
        Err(err) => {
            log::warn!("Chat backend failed: {err:#}");
            format!("Assistant call failed: {err}")
        }
    }
}
