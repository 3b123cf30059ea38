use crate::tree::Directory;
use crate::tree_renderer::{LineStyle, TreeRenderer, render_lines, trim_terminator};

/// Same layout as the plain renderer, with directories in `<strong>`, an
/// explicit `<br/>` per line and the whole tree inside `<pre>`.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlRenderer;

const HTML_STYLE: LineStyle = LineStyle {
    dir_open: "<strong>",
    dir_close: "</strong>",
    terminator: "<br/>\n",
};

impl TreeRenderer for HtmlRenderer {
    fn render_tree(&self, root: &Directory) -> String {
        let body = trim_terminator(render_lines(root, &HTML_STYLE), HTML_STYLE.terminator);
        format!("<pre>{body}</pre>")
    }
}
