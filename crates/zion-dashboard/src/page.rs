//! HTML rendering of the dashboard page.
//!
//! Built with `quick-xml`'s writer, so every piece of text that reaches the
//! page (ship names, mission names, column values) is escaped on the way out.

use std::io;

use quick_xml::{
  Writer,
  events::{BytesEnd, BytesStart, BytesText, Event},
};
use serde_json::Value as Json;
use zion_core::{
  EntityKind,
  insights::{Insights, Row, RowCounts},
};

const TITLE: &str = "Zion Insights";

const STYLE: &str = "
body { font-family: sans-serif; margin: 2rem; background: #0b0f0b; color: #c8f7c5; }
h1, h2 { color: #5cff5c; }
table { border-collapse: collapse; margin-bottom: 1.5rem; }
th, td { border: 1px solid #2d4d2d; padding: 0.25rem 0.6rem; text-align: left; }
th { background: #132013; }
p.empty { color: #7a9a7a; font-style: italic; }
";

type W = Writer<Vec<u8>>;

/// Render the full page: row counts first, then one table per insight in
/// menu order.
pub fn render(counts: &RowCounts, insights: &Insights) -> io::Result<String> {
  let mut w = Writer::new_with_indent(Vec::new(), b' ', 2);

  w.write_event(Event::DocType(BytesText::from_escaped("html")))?;
  start_with_attr(&mut w, "html", &[("lang", "en")])?;

  start(&mut w, "head")?;
  w.write_event(Event::Empty(BytesStart::new("meta").with_attributes([("charset", "utf-8")])))?;
  text_elem(&mut w, "title", TITLE)?;
  text_elem(&mut w, "style", STYLE)?;
  end(&mut w, "head")?;

  start(&mut w, "body")?;
  text_elem(&mut w, "h1", TITLE)?;
  write_counts(&mut w, counts)?;
  for (insight, rows) in insights.iter() {
    start_with_attr(&mut w, "section", &[("id", insight.name())])?;
    text_elem(&mut w, "h2", insight.title())?;
    write_rows(&mut w, rows)?;
    end(&mut w, "section")?;
  }
  end(&mut w, "body")?;
  end(&mut w, "html")?;

  String::from_utf8(w.into_inner()).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

fn write_counts(w: &mut W, counts: &RowCounts) -> io::Result<()> {
  start_with_attr(w, "section", &[("id", "row_counts")])?;
  text_elem(w, "h2", "Row counts")?;
  start(w, "table")?;

  start(w, "tr")?;
  for kind in EntityKind::INSERT_ORDER {
    text_elem(w, "th", kind.plural())?;
  }
  text_elem(w, "th", "total")?;
  end(w, "tr")?;

  start(w, "tr")?;
  for kind in EntityKind::INSERT_ORDER {
    text_elem(w, "td", &counts.get(kind).to_string())?;
  }
  text_elem(w, "td", &counts.total_rows.to_string())?;
  end(w, "tr")?;

  end(w, "table")?;
  end(w, "section")
}

/// Header from the first row's columns; all rows of one insight share them.
fn write_rows(w: &mut W, rows: &[Row]) -> io::Result<()> {
  let Some(first) = rows.first() else {
    start_with_attr(w, "p", &[("class", "empty")])?;
    w.write_event(Event::Text(BytesText::new("No rows.")))?;
    return end(w, "p");
  };

  start(w, "table")?;
  start(w, "tr")?;
  for column in first.keys() {
    text_elem(w, "th", column)?;
  }
  end(w, "tr")?;

  for row in rows {
    start(w, "tr")?;
    for column in first.keys() {
      text_elem(w, "td", &cell(row.get(column)))?;
    }
    end(w, "tr")?;
  }
  end(w, "table")
}

fn cell(value: Option<&Json>) -> String {
  match value {
    None | Some(Json::Null) => String::new(),
    Some(Json::String(s)) => s.clone(),
    Some(other) => other.to_string(),
  }
}

// ─── Writer helpers ──────────────────────────────────────────────────────────

fn start(w: &mut W, tag: &str) -> io::Result<()> {
  w.write_event(Event::Start(BytesStart::new(tag)))
}

fn start_with_attr(w: &mut W, tag: &str, attrs: &[(&str, &str)]) -> io::Result<()> {
  let mut el = BytesStart::new(tag);
  for (k, v) in attrs {
    el.push_attribute((*k, *v));
  }
  w.write_event(Event::Start(el))
}

fn end(w: &mut W, tag: &str) -> io::Result<()> {
  w.write_event(Event::End(BytesEnd::new(tag)))
}

fn text_elem(w: &mut W, tag: &str, text: &str) -> io::Result<()> {
  start(w, tag)?;
  w.write_event(Event::Text(BytesText::new(text)))?;
  end(w, tag)
}
