//! Line-oriented markdown subset for the note document.
//!
//! Recognized forms: `# ` title, `## ` section, `- ` bullet, blank line.
//! Anything else is a body paragraph. No inline styling.

use crate::story::Flowable;
use crate::style::StyleSheet;

/// Convert markdown text into a story using the given stylesheet.
pub fn to_story(text: &str, styles: &StyleSheet) -> Vec<Flowable> {
    let mut story = Vec::new();

    for line in text.lines() {
        let line = line.trim_end();
        if let Some(title) = line.strip_prefix("# ") {
            story.push(Flowable::paragraph(title.trim(), &styles.title));
            story.push(Flowable::Spacer(4.0));
            story.push(Flowable::HRule {
                thickness: 1.0,
                color: styles.rule_color,
            });
            story.push(Flowable::Spacer(10.0));
        } else if let Some(section) = line.strip_prefix("## ") {
            story.push(Flowable::paragraph(section.trim(), &styles.section));
            story.push(Flowable::Spacer(2.0));
        } else if let Some(item) = line.strip_prefix("- ") {
            story.push(Flowable::bullet(item.trim(), &styles.bullet));
        } else if line.trim().is_empty() {
            story.push(Flowable::Spacer(6.0));
        } else {
            story.push(Flowable::paragraph(line.trim(), &styles.body));
        }
    }

    if story.is_empty() {
        story.push(Flowable::paragraph("Note indisponible.", &styles.body));
    }
    story
}
