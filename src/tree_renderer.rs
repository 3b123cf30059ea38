use crate::html_renderer::HtmlRenderer;
use crate::tree::{Directory, EntryRef};
use clap::ValueEnum;

/// Turns a directory tree into text. New output formats implement this
/// without touching the tree model.
pub trait TreeRenderer {
    fn render_tree(&self, root: &Directory) -> String;
}

#[must_use]
pub fn render_tree(renderer: &dyn TreeRenderer, root: &Directory) -> String {
    renderer.render_tree(root)
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum, Default)]
pub enum RenderFormat {
    #[default]
    Plain,
    Html,
}

impl RenderFormat {
    #[must_use]
    pub fn renderer(self) -> Box<dyn TreeRenderer> {
        match self {
            RenderFormat::Plain => Box::new(PlainTextRenderer),
            RenderFormat::Html => Box::new(HtmlRenderer),
        }
    }
}

/// Per-line decoration used by the shared depth-first walk.
pub struct LineStyle {
    pub dir_open: &'static str,
    pub dir_close: &'static str,
    pub terminator: &'static str,
}

/// Indentation for a node at `depth`: `"|   "` for every ancestor below the
/// root, then `"|-- "`. The root gets nothing.
#[must_use]
pub fn depth_prefix(depth: usize) -> String {
    if depth == 0 {
        return String::new();
    }
    format!("{}|-- ", "|   ".repeat(depth - 1))
}

/// Walks `root` depth-first in stored child order and emits one terminated
/// line per node, including the final terminator.
#[must_use]
pub fn render_lines(root: &Directory, style: &LineStyle) -> String {
    let mut out = String::new();
    push_directory(&mut out, root, 0, style);
    out
}

fn push_directory(out: &mut String, dir: &Directory, depth: usize, style: &LineStyle) {
    out.push_str(&depth_prefix(depth));
    out.push_str(style.dir_open);
    out.push_str(dir.name());
    out.push_str(style.dir_close);
    out.push_str(style.terminator);

    for child in dir.children() {
        match child {
            EntryRef::File(_) => {
                out.push_str(&depth_prefix(depth + 1));
                out.push_str(child.name());
                out.push_str(style.terminator);
            }
            EntryRef::Directory(sub) => push_directory(out, sub, depth + 1, style),
        }
    }
}

/// Drops exactly one trailing `terminator` from `text`, if present.
pub(crate) fn trim_terminator(mut text: String, terminator: &str) -> String {
    if text.ends_with(terminator) {
        text.truncate(text.len() - terminator.len());
    }
    text
}

/// Directories in `backticks`, one node per line, no trailing newline.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTextRenderer;

const PLAIN_STYLE: LineStyle = LineStyle {
    dir_open: "`",
    dir_close: "`",
    terminator: "\n",
};

impl TreeRenderer for PlainTextRenderer {
    fn render_tree(&self, root: &Directory) -> String {
        trim_terminator(render_lines(root, &PLAIN_STYLE), PLAIN_STYLE.terminator)
    }
}
