use crate::{
    client::CaptionModel,
    error::Result,
    normalize::normalize,
    prompt,
    types::{GenerationRequest, GenerationResult},
};

/// Run one request through the pipeline: build the prompt, call the model
/// once, and normalize the reply.
///
/// Hashtags are dropped when the request did not ask for them, whatever the
/// model returned.
pub async fn generate_captions<M>(model: &M, request: &GenerationRequest) -> Result<GenerationResult>
where
    M: CaptionModel,
{
    let prompt = prompt::build(request);
    let raw = model.generate(&prompt).await?;

    let mut result = normalize(&raw);
    if !request.include_hashtags {
        result.hashtags.clear();
    }

    tracing::debug!(
        captions = result.captions.len(),
        hashtags = result.hashtags.len(),
        "normalized model reply"
    );
    Ok(result)
}
