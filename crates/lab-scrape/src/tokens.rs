//! Flattens an HTML syntax tree into a document-order token stream.

use std::ops::Range;

use ast_grep_core::{Doc, Node};
use ast_grep_language::{LanguageExt, SupportLang};

use crate::markup::escape_stray_markup;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    /// A `<td>` start tag.
    CellStart,
    /// Text between tags, or a `script`/`style` body; character references
    /// are still encoded.
    Text(String),
}

pub(crate) fn tokenize(source: &str) -> Vec<Token> {
    let source = escape_stray_markup(source);
    let root = SupportLang::Html.ast_grep(&*source);
    let mut tokens = Vec::new();
    collect_tokens(&root.root(), &source, &mut tokens);
    tokens
}

fn collect_tokens<D: Doc>(node: &Node<D>, source: &str, tokens: &mut Vec<Token>) {
    // tree-sitter splits "A &amp; B" into text/entity/text siblings; join
    // them back by byte range so the run stays one token.
    let mut run: Option<Range<usize>> = None;

    let children: Vec<_> = node.children().collect();
    for child in &children {
        match child.kind().as_ref() {
            "text" | "entity" => {
                let range = child.range();
                run = Some(match run.take() {
                    Some(open) => open.start..range.end,
                    None => range,
                });
            }
            "start_tag" | "self_closing_tag" => {
                flush_run(&mut run, source, tokens);
                if is_cell_tag(child) {
                    tokens.push(Token::CellStart);
                }
            }
            "raw_text" => {
                flush_run(&mut run, source, tokens);
                tokens.push(Token::Text(child.text().to_string()));
            }
            "end_tag" | "erroneous_end_tag" | "comment" | "doctype" => {
                flush_run(&mut run, source, tokens);
            }
            _ => {
                flush_run(&mut run, source, tokens);
                collect_tokens(child, source, tokens);
            }
        }
    }
    flush_run(&mut run, source, tokens);
}

fn flush_run(run: &mut Option<Range<usize>>, source: &str, tokens: &mut Vec<Token>) {
    if let Some(range) = run.take()
        && let Some(text) = source.get(range)
    {
        tokens.push(Token::Text(text.to_string()));
    }
}

fn is_cell_tag<D: Doc>(tag: &Node<D>) -> bool {
    tag.children()
        .find(|c| c.kind().as_ref() == "tag_name")
        .is_some_and(|name| name.text().eq_ignore_ascii_case("td"))
}
