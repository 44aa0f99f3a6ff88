use billet_render_core::utils::to_win_ansi;
use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};

#[derive(Default, Clone, PartialEq)]
struct PageRenderState {
    font_name: String,
    font_size: f32,
}

/// Builds the content stream of a single page.
///
/// Font changes are only emitted when the requested font differs from the
/// one already selected.
pub struct PageContext {
    content: Content,
    state: PageRenderState,
}

impl PageContext {
    pub fn new() -> Self {
        Self {
            content: Content { operations: vec![] },
            state: Default::default(),
        }
    }

    pub fn finish(self) -> Content {
        self.content
    }

    pub fn operation_count(&self) -> usize {
        self.content.operations.len()
    }

    fn set_font(&mut self, font_name: &str, font_size: f32) {
        if self.state.font_name != font_name || self.state.font_size != font_size {
            self.content.operations.push(Operation::new(
                "Tf",
                vec![Object::Name(font_name.as_bytes().to_vec()), font_size.into()],
            ));
            self.state.font_name = font_name.to_string();
            self.state.font_size = font_size;
        }
    }

    /// Draws `text` with its baseline starting at `(x, y)`.
    pub fn draw_text(&mut self, x: f32, y: f32, text: &str, font_name: &str, font_size: f32) {
        if text.trim().is_empty() {
            return;
        }
        self.content.operations.push(Operation::new("BT", vec![]));
        self.set_font(font_name, font_size);
        self.content.operations.push(Operation::new("Td", vec![x.into(), y.into()]));
        self.content.operations.push(Operation::new(
            "Tj",
            vec![Object::String(to_win_ansi(text), StringFormat::Literal)],
        ));
        self.content.operations.push(Operation::new("ET", vec![]));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn operators(ctx: PageContext) -> Vec<String> {
        ctx.finish().operations.into_iter().map(|op| op.operator).collect()
    }

    #[test]
    fn test_text_is_wrapped_in_text_object() {
        let mut ctx = PageContext::new();
        ctx.draw_text(50.0, 700.0, "Hello", "F1", 9.0);
        assert_eq!(operators(ctx), ["BT", "Tf", "Td", "Tj", "ET"]);
    }

    #[test]
    fn test_font_selection_is_not_repeated() {
        let mut ctx = PageContext::new();
        ctx.draw_text(50.0, 700.0, "a", "F1", 9.0);
        ctx.draw_text(100.0, 700.0, "b", "F1", 9.0);
        ctx.draw_text(100.0, 680.0, "c", "F2", 9.0);
        let ops = operators(ctx);
        assert_eq!(ops.iter().filter(|op| *op == "Tf").count(), 2);
    }

    #[test]
    fn test_blank_text_is_skipped() {
        let mut ctx = PageContext::new();
        ctx.draw_text(50.0, 700.0, "", "F1", 9.0);
        ctx.draw_text(50.0, 700.0, "   ", "F1", 9.0);
        assert_eq!(ctx.operation_count(), 0);
    }
}
