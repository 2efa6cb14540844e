//! Console rendering.
//!
//! Everything the user reads on stdout is produced here as plain strings so
//! the binary stays a thin sequence of `println!` calls and the wording can
//! be unit-tested.  Diagnostic detail goes through `tracing` on stderr instead.

use logo_core::Design;

use crate::application::apply_design::{ApplyOutcome, IconOutcome, IconStatus};
use crate::application::list_designs::DesignListing;

pub const BANNER: &str = "🚀 TaskPulse Logo Applicator";

/// The design table, one line per design, plus the featured footnote.
pub fn render_listing(rows: &[DesignListing]) -> String {
    let mut lines = vec!["🎨 Available logo designs:".to_string()];
    for row in rows {
        let star = if row.design.featured { " ⭐" } else { "" };
        let mark = if row.file_present { "✅" } else { "❌" };
        lines.push(format!(
            "   {}. {}{} {}",
            row.design.number, row.design.description, star, mark
        ));
    }
    lines.push(String::new());
    lines.push("⭐ Featured designs combine task management with the pulse motif".to_string());
    lines.join("\n")
}

pub fn render_usage(program: &str) -> String {
    [
        "💡 Usage:".to_string(),
        format!("   {program} <design-number>"),
        format!("   e.g.: {program} 5"),
    ]
    .join("\n")
}

pub fn render_selection(design: &Design) -> String {
    format!("🎯 You chose design {}: {}", design.number, design.description)
}

/// Step-by-step progress text followed by the final banner.
pub fn render_outcome(outcome: &ApplyOutcome) -> String {
    let mut lines = Vec::new();
    match outcome {
        ApplyOutcome::DesignFileMissing { design_file } => {
            lines.push(format!("❌ Design file not found: {}", design_file.display()));
        }
        ApplyOutcome::LogoUpdateFailed {
            design,
            icons,
            error,
        } => {
            lines.push(format!("🎨 Applying design {design}..."));
            push_icons(&mut lines, icons);
            lines.push("🖼️  Updating in-app logo...".to_string());
            lines.push(format!("❌ Failed to update in-app logo: {error}"));
        }
        ApplyOutcome::PromotionFailed {
            design,
            icons,
            backup,
            error,
        } => {
            lines.push(format!("🎨 Applying design {design}..."));
            push_icons(&mut lines, icons);
            lines.push("🖼️  Updating in-app logo...".to_string());
            lines.push("✅ In-app logo updated".to_string());
            if let Some(backup) = backup {
                lines.push(format!("💾 Backed up current logo as: {}", backup.display()));
            }
            lines.push(format!("❌ Failed to set default logo: {error}"));
        }
        ApplyOutcome::Applied(report) => {
            lines.push(format!("🎨 Applying design {}...", report.design));
            push_icons(&mut lines, &report.icons);
            lines.push("🖼️  Updating in-app logo...".to_string());
            lines.push("✅ In-app logo updated".to_string());
            if let Some(backup) = &report.backup {
                lines.push(format!("💾 Backed up current logo as: {}", backup.display()));
            }
            lines.push(format!("🎉 Design {} applied successfully!", report.design));
        }
    }

    lines.push(String::new());
    if outcome.is_success() {
        lines.push("✨ Logo update complete!".to_string());
        lines.push("📱 Rebuild the app in Xcode to see the new logo".to_string());
    } else {
        lines.push("❌ Logo update failed".to_string());
    }
    lines.join("\n")
}

fn push_icons(lines: &mut Vec<String>, icons: &[IconOutcome]) {
    lines.push("📱 Updating app icons...".to_string());
    for icon in icons {
        lines.push(match &icon.status {
            IconStatus::Written => format!("✅ Generated: {}", icon.file_name),
            IconStatus::ToolFailed { .. } => format!("❌ Generation failed: {}", icon.file_name),
            IconStatus::LaunchFailed { reason } => {
                format!("❌ Generation error: {} - {reason}", icon.file_name)
            }
        });
    }
}
