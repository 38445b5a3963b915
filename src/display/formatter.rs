//! Markdown terminal output using termimad

use termimad::{gray, MadSkin};

use crate::display::terminal::should_use_colors;
use crate::models::Repository;

/// Print markdown to the terminal, styled when colours are enabled
pub fn print_markdown(markdown: &str) {
    if should_use_colors() {
        skin().print_text(markdown);
    } else {
        println!("{}", markdown);
    }
}

/// Markdown table of repositories as returned by the listing call
pub fn repositories_table(owner: &str, repositories: &[Repository]) -> String {
    let mut output = format!("## Repositories of {}\n\n", owner);

    if repositories.is_empty() {
        output.push_str("*No public repositories.*\n");
        return output;
    }

    output.push_str("| Name | Language | Description |\n");
    output.push_str("|------|----------|-------------|\n");
    for repo in repositories {
        output.push_str(&format!(
            "| {} | {} | {} |\n",
            repo.name,
            repo.language.as_deref().unwrap_or("-"),
            repo.description
                .as_deref()
                .map(|d| d.replace('|', "\\|"))
                .unwrap_or_default()
        ));
    }

    output
}

fn skin() -> MadSkin {
    use termimad::crossterm::style::{Attribute, Color::*};

    let mut skin = MadSkin::default();

    skin.headers[0].set_fg(Cyan);
    skin.headers[0].add_attr(Attribute::Bold);
    skin.headers[1].set_fg(Blue);
    skin.headers[1].add_attr(Attribute::Bold);
    skin.headers[2].set_fg(Yellow);

    // Message bodies are fenced as code blocks
    skin.code_block.set_bg(gray(2));
    skin.code_block.set_fg(White);

    // Short hashes
    skin.inline_code.set_fg(Green);

    skin.bold.add_attr(Attribute::Bold);
    skin.bullet.set_fg(Cyan);

    skin
}
