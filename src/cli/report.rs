// ============================================================
// Layer 1 — Report Rendering
// ============================================================
// Plain-text rendering of a PipelineReport for stdout:
//
//   Number of training samples: 80
//   Number of testing samples: 20
//   Training the model...
//   Accuracy: 95.00%
//   ...six metrics...
//   Email: Buy one, get one free!
//   Predicted as spam with probability 97.31%
//   <blank line>

use crate::application::pipeline_use_case::PipelineReport;
use crate::application::validate_use_case::DatasetSummary;

fn percent(ratio: f64) -> String {
    format!("{:.2}%", ratio * 100.0)
}

pub fn render_report(report: &PipelineReport) -> String {
    let m = &report.metrics;
    let mut out = format!(
        "Number of training samples: {}\n\
         Number of testing samples: {}\n\
         Training the model...\n\
         Accuracy: {}\n\
         F1 Score: {}\n\
         Positive Precision: {}\n\
         Negative Precision: {}\n\
         Positive Recall: {}\n\
         Negative Recall: {}\n",
        report.train_count,
        report.test_count,
        percent(m.accuracy),
        percent(m.f1_score),
        percent(m.positive_precision),
        percent(m.negative_precision),
        percent(m.positive_recall),
        percent(m.negative_recall),
    );

    for example in &report.predictions {
        let p = &example.prediction;
        out.push_str(&format!(
            "Email: {}\nPredicted as {} with probability {}\n\n",
            example.text,
            p.label(),
            percent(f64::from(p.probability))
        ));
    }

    out
}

pub fn render_summary(summary: &DatasetSummary) -> String {
    let mut out = format!(
        "Records: {}\nSpam: {}\nNot spam: {}\n",
        summary.records, summary.classes.spam, summary.classes.not_spam
    );
    if summary.empty_texts > 0 {
        out.push_str(&format!("Empty texts: {}\n", summary.empty_texts));
    }
    out
}
