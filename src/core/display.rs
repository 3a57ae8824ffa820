use crate::core::augment::ExplanationAugmenter;
use crate::domain::model::{EntryRecord, ResultSet};
use crate::domain::ports::Renderer;
use crate::utils::error::Result;

pub const NO_RESULTS_NOTICE: &str = "No results found.";

/// Emits one record per entry in sorted order, or the "no results" notice.
///
/// With an augmenter, each summary is explained right before its record is
/// emitted; the first generation failure stops the pass.
pub async fn display<R: Renderer + ?Sized>(
    results: &ResultSet,
    renderer: &mut R,
    augmenter: Option<&ExplanationAugmenter>,
) -> Result<usize> {
    if results.is_empty() {
        renderer.notice(NO_RESULTS_NOTICE)?;
        renderer.finish()?;
        return Ok(0);
    }

    let mut emitted = 0;
    for entry in results {
        let explanation = match augmenter {
            Some(augmenter) => Some(augmenter.explain(&entry.summary).await?),
            None => None,
        };

        renderer.record(&EntryRecord::new(entry, explanation))?;
        emitted += 1;
    }

    renderer.finish()?;
    Ok(emitted)
}
