//! Locating a section between headings.

use tracing::debug;

use crate::error::ExtractionError;

/// Return the text from the first `start_marker` up to the earliest of the
/// `stop_markers` that follows it, or to the end of the text.
///
/// Every stop marker is searched and the smallest offset wins, since the
/// order of the sections after the start marker varies between documents.
pub fn locate_section<'a, S: AsRef<str>>(
    full_text: &'a str,
    start_marker: &str,
    stop_markers: &[S],
) -> Result<&'a str, ExtractionError> {
    let start = full_text
        .find(start_marker)
        .filter(|_| !start_marker.is_empty())
        .ok_or_else(|| ExtractionError::SectionNotFound {
            marker: start_marker.to_string(),
        })?;

    let tail = &full_text[start..];
    let body_offset = start_marker.len();

    // Stop markers are searched after the heading itself so that a marker
    // contained in the heading does not produce an empty section.
    let end = stop_markers
        .iter()
        .map(AsRef::as_ref)
        .filter(|m| !m.is_empty())
        .filter_map(|m| tail[body_offset..].find(m).map(|i| i + body_offset))
        .min()
        .unwrap_or(tail.len());

    debug!(
        "Section '{}' found at byte {} ({} bytes)",
        start_marker, start, end
    );

    Ok(&tail[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: &str = "DECLARAÇÃO DE BENS E DIREITOS";

    #[test]
    fn test_section_runs_to_end_without_stop_marker() {
        let text = "cabeçalho\nDECLARAÇÃO DE BENS E DIREITOS\n01 11 Apto 1,00 2,00\n";
        let section = locate_section(text, START, &["DÍVIDAS E ÔNUS"]).unwrap();
        assert_eq!(section, "DECLARAÇÃO DE BENS E DIREITOS\n01 11 Apto 1,00 2,00\n");
    }

    #[test]
    fn test_earliest_stop_marker_wins() {
        let text = "DECLARAÇÃO DE BENS E DIREITOS\nitens\nRENDIMENTOS\nmais\nDÍVIDAS E ÔNUS\n";
        let section =
            locate_section(text, START, &["DÍVIDAS E ÔNUS", "RENDIMENTOS"]).unwrap();
        assert_eq!(section, "DECLARAÇÃO DE BENS E DIREITOS\nitens\n");
    }

    #[test]
    fn test_stop_marker_before_start_is_ignored() {
        let text = "RENDIMENTOS\nDECLARAÇÃO DE BENS E DIREITOS\nitens\n";
        let section = locate_section(text, START, &["RENDIMENTOS"]).unwrap();
        assert_eq!(section, "DECLARAÇÃO DE BENS E DIREITOS\nitens\n");
    }

    #[test]
    fn test_missing_start_marker_is_fatal() {
        let err = locate_section("nada aqui", START, &["RENDIMENTOS"]).unwrap_err();
        match err {
            ExtractionError::SectionNotFound { marker } => assert_eq!(marker, START),
        }
    }

    #[test]
    fn test_empty_text_is_fatal() {
        let stops: [&str; 0] = [];
        assert!(locate_section("", START, &stops).is_err());
    }
}
