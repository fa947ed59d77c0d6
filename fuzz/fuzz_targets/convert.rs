#![no_main]

use libfuzzer_sys::fuzz_target;
use the_case::{
  Style,
  StyleName,
  Tendril,
  chars::char_is_word,
  translator::fold_case,
};

fn folded_word_chars(text: &str, separator: Option<char>) -> Vec<char> {
  let mut chars: Vec<char> = text
    .chars()
    .filter(|&ch| Some(ch) != separator && char_is_word(ch))
    .map(fold_case)
    .collect();
  chars.sort_unstable();
  chars
}

fuzz_target!(|data: &[u8]| {
  let text = String::from_utf8_lossy(data);
  let has_word = text.chars().any(char_is_word);
  let expected = folded_word_chars(&text, None);

  for name in StyleName::ALL {
    let style = Style::from(name);
    let separator = style.separator();
    let out = style.apply(text.chars());
    assert_eq!(!out.is_empty(), has_word, "{style}: {text:?} -> {out:?}");
    assert!(
      out
        .chars()
        .all(|ch| char_is_word(ch) || Some(ch) == separator),
      "{style}: {text:?} -> {out:?}"
    );
    assert_eq!(
      folded_word_chars(&out, separator),
      expected,
      "{style}: {text:?} -> {out:?}"
    );

    let mut buf = Tendril::from("prefix");
    style.apply_with(text.chars(), &mut buf);
    assert_eq!(&buf.as_str()["prefix".len()..], out.as_str());
  }

  if let Ok(style) = text.parse::<Style>() {
    assert_eq!(style.to_string().parse::<Style>(), Ok(style));
  }
});
