use pdf_justify::layout::{layout, partition, split_words, spread_spaces, LaidOutLine, Measure};
use pdf_justify::Pt;

fn monospace(text: &str) -> Pt {
    Pt(text.chars().count() as f32 * 6.0)
}

/// Rough proportional widths, loosely modelled on a serif face at 10pt
fn proportional(text: &str) -> Pt {
    text.chars()
        .map(|ch| match ch {
            ' ' => Pt(2.5),
            'i' | 'j' | 'l' | 't' | 'f' | '.' | ',' => Pt(2.8),
            'm' | 'w' | 'M' | 'W' => Pt(7.8),
            ch if ch.is_uppercase() => Pt(6.7),
            _ => Pt(5.0),
        })
        .sum()
}

fn paragraphs() -> Vec<String> {
    vec![
        lipsum::lipsum(12),
        lipsum::lipsum(75),
        lipsum::lipsum(240),
        "A  paragraph with    irregular spacing,\ttabs, and one \
         Pneumonoultramicroscopicsilicovolcanoconiosis in the middle of it."
            .to_string(),
    ]
}

fn widths() -> Vec<Pt> {
    (4..=60).map(|step| Pt(step as f32 * 7.5)).collect()
}

fn check_properties<M: Measure>(measure: &M) {
    for text in paragraphs() {
        let words = split_words(&text);
        for width in widths() {
            let lines = layout(&text, width, Pt(12.0), measure);

            // word preservation
            let laid_out: Vec<&str> = lines
                .iter()
                .flat_map(|line| line.text.split_whitespace())
                .collect();
            assert_eq!(laid_out, words, "words changed at width {width}");

            for (i, line) in lines.iter().enumerate() {
                // no empty lines, indices and positions in order
                assert!(!line.text.trim().is_empty());
                assert_eq!(line.index, i);
                assert_eq!(line.y, Pt(12.0) * i as f32);

                let word_count = line.text.split_whitespace().count();
                let is_last = i + 1 == lines.len();
                if !is_last && word_count > 1 {
                    // width bound on justified lines
                    assert!(
                        measure.measure(&line.text) <= width,
                        "{:?} overflows {width}",
                        line.text
                    );
                    assert_even_gaps(line);
                }
                if word_count > 1 {
                    // a word too wide for the line never shares it
                    assert!(line
                        .text
                        .split_whitespace()
                        .all(|word| measure.measure(word) <= width));
                }
                if is_last {
                    let plain = line.text.split_whitespace().collect::<Vec<_>>().join(" ");
                    assert_eq!(line.text, plain);
                }
            }
        }
    }
}

/// Gaps may differ by at most one space, with the wider gaps first
fn assert_even_gaps(line: &LaidOutLine) {
    let gaps: Vec<usize> = line
        .text
        .split(|ch: char| !ch.is_whitespace())
        .filter(|gap| !gap.is_empty())
        .map(str::len)
        .collect();
    let widest = gaps.iter().copied().max().unwrap_or_default();
    let narrowest = gaps.iter().copied().min().unwrap_or_default();
    assert!(widest - narrowest <= 1, "uneven gaps in {:?}", line.text);
    assert!(
        gaps.windows(2).all(|pair| pair[0] >= pair[1]),
        "wide gaps should come first in {:?}",
        line.text
    );
}

#[test]
fn monospace_layouts_hold_their_properties() {
    check_properties(&monospace);
}

#[test]
fn proportional_layouts_hold_their_properties() {
    check_properties(&proportional);
}

#[test]
fn layout_is_idempotent() {
    let text = lipsum::lipsum(150);
    for width in widths() {
        assert_eq!(
            layout(&text, width, Pt(14.0), &proportional),
            layout(&text, width, Pt(14.0), &proportional)
        );
    }
}

#[test]
fn the_quick_brown_fox() {
    // "The quick brown" is exactly 90pt in a 6pt monospace face
    let lines = layout("The quick brown fox", Pt(90.0), Pt(12.0), &monospace);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].text, "The quick brown");
    assert_eq!(lines[1].text, "fox");

    // with room for three more spaces, two of them are used, one per gap
    let lines = layout("The quick brown fox", Pt(108.0), Pt(12.0), &monospace);
    assert_eq!(lines[0].text, "The  quick  brown");
    assert!(monospace(&lines[0].text) <= Pt(108.0));
    assert_eq!(lines[1].text, "fox");
}

#[test]
fn single_overlong_word() {
    let lines = layout("Pneumonoultramicroscopic", Pt(30.0), Pt(12.0), &monospace);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].text, "Pneumonoultramicroscopic");
    assert!(monospace(&lines[0].text) > Pt(30.0));
}

#[test]
fn empty_input_lays_out_nothing() {
    assert!(layout("", Pt(300.0), Pt(12.0), &monospace).is_empty());
    assert!(layout(" \t\n ", Pt(300.0), Pt(12.0), &monospace).is_empty());
}

#[test]
fn zero_width_puts_every_word_on_its_own_line() {
    let text = lipsum::lipsum(20);
    let words = split_words(&text);
    let lines = layout(&text, Pt(0.0), Pt(12.0), &monospace);
    assert_eq!(lines.len(), words.len());
    for (line, word) in lines.iter().zip(words) {
        assert_eq!(line.text, word);
    }
}

#[test]
fn partitioning_keeps_every_word_once() {
    let text = lipsum::lipsum(300);
    let words = split_words(&text);
    for width in widths() {
        let lines = partition(&words, width, &proportional);
        assert!(lines.iter().all(|line| !line.words.is_empty()));
        assert_eq!(lines.iter().filter(|line| line.is_last).count(), 1);
        assert!(lines.last().is_some_and(|line| line.is_last));
        let rejoined: Vec<&str> = lines
            .iter()
            .flat_map(|line| line.words.iter().copied())
            .collect();
        assert_eq!(rejoined, words);
    }
}

#[test]
fn spreads_differ_by_at_most_one() {
    for gaps in 1..12 {
        for extra in 0..50 {
            let spread = spread_spaces(extra, gaps);
            assert_eq!(spread.len(), gaps);
            assert_eq!(spread.iter().sum::<usize>(), extra);
            let widest = spread.iter().max().copied().unwrap_or_default();
            let narrowest = spread.iter().min().copied().unwrap_or_default();
            assert!(widest - narrowest <= 1);
        }
    }
}

#[test]
fn whole_point_measures_still_justify() {
    let rounded = |text: &str| -> Pt {
        let raw: f32 = text
            .chars()
            .map(|ch| if ch == ' ' { 0.75 } else { 6.0 })
            .sum();
        Pt(raw.round())
    };
    let lines = layout("aa bb cc dddddddddddd", Pt(42.0), Pt(12.0), &rounded);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].text, "aa    bb   cc");
    assert_eq!(lines[1].text, "dddddddddddd");
}
