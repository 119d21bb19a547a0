/* src/client/dom/rust/src/escape.rs */

/// Escape text for use inside an element body.
pub(crate) fn escape_text(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for ch in s.chars() {
    match ch {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      c => out.push(c),
    }
  }
  out
}

/// Escape text for use inside a double-quoted attribute value.
pub(crate) fn escape_attr(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for ch in s.chars() {
    match ch {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      c => out.push(c),
    }
  }
  out
}

fn named_entity(name: &str) -> Option<char> {
  match name {
    "amp" => Some('&'),
    "lt" => Some('<'),
    "gt" => Some('>'),
    "quot" => Some('"'),
    "apos" => Some('\''),
    "nbsp" => Some('\u{a0}'),
    "middot" => Some('·'),
    "ndash" => Some('–'),
    "mdash" => Some('—'),
    "copy" => Some('©'),
    _ => None,
  }
}

fn numeric_entity(body: &str) -> Option<char> {
  let code = if let Some(hex) = body.strip_prefix('x').or_else(|| body.strip_prefix('X')) {
    u32::from_str_radix(hex, 16).ok()?
  } else {
    body.parse::<u32>().ok()?
  };
  char::from_u32(code)
}

/// Decode character references. Unknown or unterminated references are kept
/// verbatim.
pub(crate) fn decode_entities(s: &str) -> String {
  if !s.contains('&') {
    return s.to_string();
  }
  let mut out = String::with_capacity(s.len());
  let mut rest = s;
  while let Some(amp) = rest.find('&') {
    out.push_str(&rest[..amp]);
    let after = &rest[amp + 1..];
    // References are short; a distant ';' belongs to something else
    let semi = after.find(';').filter(|&i| i > 0 && i <= 10);
    let decoded = semi.and_then(|i| {
      let body = &after[..i];
      let ch = match body.strip_prefix('#') {
        Some(num) => numeric_entity(num),
        None => named_entity(body),
      };
      ch.map(|c| (c, i))
    });
    match decoded {
      Some((ch, i)) => {
        out.push(ch);
        rest = &after[i + 1..];
      }
      None => {
        out.push('&');
        rest = after;
      }
    }
  }
  out.push_str(rest);
  out
}
