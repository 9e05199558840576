//! Static guidance text: banner, quick start, platform notes, links.

use std::io::Write;

use crate::error::Result;
use crate::ui::Theme;

/// Render the top banner.
pub fn render_banner(theme: &Theme, out: &mut impl Write) -> Result<()> {
    let top = "╔════════════════════════════════════════════════════════════╗";
    let mid = "║         Gemini CLI - Quick Setup & Diagnostics            ║";
    let bot = "╚════════════════════════════════════════════════════════════╝";
    for line in [top, mid, bot] {
        writeln!(out, "{}", theme.header.apply_to(line))?;
    }
    Ok(())
}

/// Render the quick-start guide.
pub fn render_quick_start(theme: &Theme, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", theme.format_section("Quick Start Guide"))?;
    writeln!(out, "\nTo get started with Gemini CLI:\n")?;

    writeln!(out, "{}", theme.info.apply_to("1. Install dependencies:"))?;
    writeln!(out, "   npm install\n")?;

    writeln!(out, "{}", theme.info.apply_to("2. Build the project:"))?;
    writeln!(out, "   npm run build\n")?;

    writeln!(out, "{}", theme.info.apply_to("3. Start Gemini CLI:"))?;
    writeln!(out, "   npm start\n")?;

    writeln!(out, "{}", theme.info.apply_to("4. Or use the built bundle:"))?;
    writeln!(out, "   node bundle/gemini.js\n")?;

    writeln!(out, "{}", theme.highlight.apply_to("Authentication Options:"))?;
    writeln!(out, "  • Google Login: Just run gemini and follow prompts")?;
    writeln!(out, "  • API Key: Set GEMINI_API_KEY environment variable")?;
    writeln!(
        out,
        "  • Vertex AI: Set GOOGLE_API_KEY and GOOGLE_GENAI_USE_VERTEXAI=true\n"
    )?;
    Ok(())
}

/// Render Windows-specific tips.
///
/// Writes nothing unless `platform` is the Windows identifier; the
/// platform is a parameter so the gate is testable off-Windows.
pub fn render_windows_notes(platform: &str, theme: &Theme, out: &mut impl Write) -> Result<()> {
    if platform != "windows" {
        return Ok(());
    }

    writeln!(out, "{}", theme.format_section("Windows-Specific Information"))?;
    writeln!(
        out,
        "{}",
        theme
            .warning
            .apply_to("You are running on Windows. Additional tips:")
    )?;
    writeln!(out, "  • See WINDOWS_SETUP.md for detailed Windows instructions")?;
    writeln!(out, "  • Use PowerShell or Windows Terminal for best experience")?;
    writeln!(out, "  • Consider WSL2 for better Linux compatibility")?;
    writeln!(out, "  • Set environment variables in PowerShell:")?;
    writeln!(out, "    $env:GEMINI_API_KEY=\"your-api-key\"")?;
    Ok(())
}

/// Render the additional-resources section and footer.
pub fn render_resources(theme: &Theme, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", theme.format_section("Additional Resources"))?;
    writeln!(out, "  • Main Documentation: README.md")?;
    writeln!(out, "  • Windows Guide: WINDOWS_SETUP.md")?;
    writeln!(out, "  • Fork Changelog: FORK_CHANGELOG.md")?;
    writeln!(out, "  • Contributing: CONTRIBUTING.md")?;
    writeln!(out, "  • Troubleshooting: docs/troubleshooting.md")?;

    writeln!(out, "\n{}\n", "=".repeat(60))?;
    writeln!(
        out,
        "{}",
        theme
            .info
            .apply_to("For more help, visit: https://github.com/Ibrahim4594/gemini-cli")
    )?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_to_string(f: impl Fn(&Theme, &mut Vec<u8>) -> Result<()>) -> String {
        let theme = Theme::plain();
        let mut out = Vec::new();
        f(&theme, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn banner_names_the_tool() {
        let text = render_to_string(|t, o| render_banner(t, o));
        assert!(text.contains("Gemini CLI"));
        assert!(text.contains("╔"));
    }

    #[test]
    fn quick_start_lists_build_steps() {
        let text = render_to_string(|t, o| render_quick_start(t, o));
        assert!(text.contains("npm install"));
        assert!(text.contains("npm run build"));
        assert!(text.contains("npm start"));
        assert!(text.contains("node bundle/gemini.js"));
        assert!(text.contains("GEMINI_API_KEY"));
    }

    #[test]
    fn windows_notes_render_on_windows() {
        let text = render_to_string(|t, o| render_windows_notes("windows", t, o));
        assert!(text.contains("Windows-Specific Information"));
        assert!(text.contains("WSL2"));
    }

    #[test]
    fn windows_notes_silent_elsewhere() {
        for platform in ["linux", "macos", "freebsd"] {
            let text = render_to_string(|t, o| render_windows_notes(platform, t, o));
            assert!(text.is_empty(), "expected no output on {}", platform);
        }
    }

    #[test]
    fn resources_list_docs_and_repo_url() {
        let text = render_to_string(|t, o| render_resources(t, o));
        assert!(text.contains("README.md"));
        assert!(text.contains("docs/troubleshooting.md"));
        assert!(text.contains("https://github.com/Ibrahim4594/gemini-cli"));
    }
}
