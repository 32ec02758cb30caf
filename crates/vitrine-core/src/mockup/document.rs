//! Document skeleton. Content draws: 5 heading widths, then 4 line widths
//! for each of the 3 blocks. No stat card.

use crate::rng::SeededRng;
use crate::select::Theme;

use super::{Mockup, MockupBuilder};

const HEADINGS: usize = 5;
const BLOCKS: usize = 3;
const LINES_PER_BLOCK: usize = 4;

const CSS: &str = r#"
      .doc { display: grid; grid-template-columns: 120px 1fr; gap: 18px; }
      .doc__toc, .doc__body { display: grid; gap: 8px; align-content: start; }
      .doc__heading { height: 9px; border-radius: 6px; background: var(--accent-soft); }
      .doc__block { display: grid; gap: 6px; padding-bottom: 10px; border-bottom: 1px dashed var(--border); }
      .doc__line { height: 7px; border-radius: 6px; background: var(--surface-soft); }
      .doc__block .doc__line:first-child { background: var(--highlight-soft); height: 10px; }
"#;

pub(super) fn build(rng: &mut SeededRng, theme: &Theme) -> Mockup {
    let headings: Vec<u32> = (0..HEADINGS).map(|_| rng.range_inclusive(40, 95)).collect();
    let blocks: Vec<Vec<u32>> = (0..BLOCKS)
        .map(|_| {
            (0..LINES_PER_BLOCK)
                .map(|_| rng.range_inclusive(55, 100))
                .collect()
        })
        .collect();

    let toc: String = headings
        .iter()
        .map(|w| format!(r#"<span class="doc__heading" style="width: {w}%"></span>"#))
        .collect();
    let body: String = blocks
        .iter()
        .map(|lines| {
            let lines: String = lines
                .iter()
                .map(|w| format!(r#"<span class="doc__line" style="width: {w}%"></span>"#))
                .collect();
            format!(r#"<div class="doc__block">{lines}</div>"#)
        })
        .collect();

    let mut builder = MockupBuilder::new("document", CSS);
    builder.push_html(&format!(
        r#"<div class="mockup__head"><h3 class="mockup__title">README.md</h3><span class="mockup__tag">rascunho</span></div>
        <div class="doc"><div class="doc__toc">{toc}</div><div class="doc__body">{body}</div></div>"#
    ));
    builder.swatch(rng, theme);

    let head: Vec<String> = headings.iter().take(3).map(u32::to_string).collect();
    let block_heads: Vec<String> = blocks
        .iter()
        .take(2)
        .filter_map(|lines| lines.first())
        .map(u32::to_string)
        .collect();
    builder.finish(format!(
        "document:{}:{}",
        head.join("/"),
        block_heads.join("/")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::select::select_theme;

    #[test]
    fn test_document_shape() {
        let mut rng = SeededRng::new(12);
        let theme = select_theme(&mut rng, None, None);
        let mockup = build(&mut rng, &theme);
        assert_eq!(mockup.html.matches("class=\"doc__heading\"").count(), HEADINGS);
        assert_eq!(mockup.html.matches("class=\"doc__line\"").count(), BLOCKS * LINES_PER_BLOCK);

        let parts: Vec<&str> = mockup.signature.split(':').collect();
        assert_eq!(parts[1].split('/').count(), 3);
        assert_eq!(parts[2].split('/').count(), 2);
    }
}
