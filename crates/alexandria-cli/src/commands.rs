use std::io::{BufRead, Write};

use alexandria_chat::conversation::Conversation;
use alexandria_core::models::catalog::SymptomCatalog;
use alexandria_core::models::transcript::Transcript;
use alexandria_extract::ClinicalTextExtractor;
use serde_json::json;

/// Narratives walked through by `alexandria demo`.
pub const DEMO_NARRATIVES: &[&str] = &[
    "I have awful pelvic pain today, maybe a 7 out of 10, and I feel really fatigued.",
    "Lower back pain is killing me, it's like 9/10 right now.",
    "Just mild cramps and a bit of nausea, maybe a 3 today.",
    "Terrible headache and fatigue, couldn't sleep at all.",
    "Almost no pain today, maybe 1 out of 10, just a bit of bloating.",
];

/// Print one pretty JSON record per narrative.
pub fn extract_texts(
    extractor: ClinicalTextExtractor<'_>,
    texts: &[String],
    out: &mut impl Write,
) -> eyre::Result<()> {
    for text in texts {
        let record = extractor.extract(text);
        writeln!(out, "{}", serde_json::to_string_pretty(&record)?)?;
    }
    Ok(())
}

/// Read one JSON value per line and write one compact result per line.
///
/// Values that are not strings produce an `{"error": ...}` line; the stream
/// keeps going. Lines that are not JSON at all abort the run.
pub fn extract_jsonl(
    extractor: ClinicalTextExtractor<'_>,
    input: impl BufRead,
    out: &mut impl Write,
) -> eyre::Result<usize> {
    let mut processed = 0;
    for (index, line) in input.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let value: serde_json::Value = serde_json::from_str(&line)
            .map_err(|e| eyre::eyre!("line {}: not valid JSON: {e}", index + 1))?;

        match extractor.extract_value(&value) {
            Ok(record) => writeln!(out, "{}", serde_json::to_string(&record)?)?,
            Err(e) => {
                tracing::warn!(line = index + 1, error = %e, "skipping line");
                writeln!(out, "{}", json!({ "error": e.to_string() }))?;
            }
        }
        processed += 1;
    }
    Ok(processed)
}

/// Run the sample narratives and print each record.
pub fn demo(extractor: ClinicalTextExtractor<'_>, out: &mut impl Write) -> eyre::Result<()> {
    for (i, text) in DEMO_NARRATIVES.iter().enumerate() {
        let record = extractor.extract(text);
        writeln!(out, "\n=== Test case {} ===", i + 1)?;
        writeln!(out, "{}", serde_json::to_string_pretty(&record)?)?;
    }
    Ok(())
}

/// Interactive companion loop. Each non-empty input line is one user turn.
/// Ends at EOF or on `/quit`, returning the transcript.
pub fn chat(
    extractor: ClinicalTextExtractor<'_>,
    input: impl BufRead,
    out: &mut impl Write,
    show_record: bool,
) -> eyre::Result<Transcript> {
    let mut conversation = Conversation::new(extractor);

    writeln!(out, "Describe how you're feeling today... (/quit to leave)")?;
    out.flush()?;
    for line in input.lines() {
        let line = line?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        if text == "/quit" {
            break;
        }

        let turn = conversation.submit(text);
        writeln!(out, "assistant> {}", turn.content)?;
        if show_record && let Some(record) = &turn.extracted {
            writeln!(out, "{}", serde_json::to_string_pretty(record)?)?;
        }
        out.flush()?;
    }

    Ok(conversation.into_transcript())
}

/// Print the catalog in matching order.
pub fn print_catalog(catalog: &SymptomCatalog, out: &mut impl Write) -> eyre::Result<()> {
    let width = catalog
        .scan_order()
        .map(|e| e.phrase.chars().count())
        .max()
        .unwrap_or(0);
    for entry in catalog.scan_order() {
        writeln!(out, "{:<width$}  {}", entry.phrase, entry.code)?;
    }
    Ok(())
}
