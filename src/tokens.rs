use crate::errors::ExportError;
use tiktoken_rs::get_bpe_from_model;
use tracing::trace;

/// Rough token estimate: one token per four characters, rounded up.
pub fn estimate_tokens(content: &str) -> usize {
    content.chars().count().div_ceil(4)
}

/// Exact BPE token count for `model`. Only used for reporting; budget
/// admission always runs on [`estimate_tokens`].
pub fn count_bpe_tokens(model: &str, content: &str) -> Result<usize, ExportError> {
    let tokenizer =
        get_bpe_from_model(model).map_err(|e| ExportError::TokenizerError(e.to_string()))?;
    let count = tokenizer.encode_ordinary(content).len();
    trace!("{} BPE tokens for model {}", count, model);
    Ok(count)
}
