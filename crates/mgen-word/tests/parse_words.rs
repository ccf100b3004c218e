use mgen_core::MgenError;
use mgen_word::{Tag, Word};

#[test]
fn identity_forms_parse_to_empty_word() -> Result<(), MgenError> {
    assert!(Word::parse("M<1>")?.is_empty());
    assert!(Word::parse("  M<1>  ")?.is_empty());
    assert_eq!(Word::identity().to_string(), "M<1>");
    Ok(())
}

#[test]
fn atoms_keep_tags_and_values_in_order() -> Result<(), MgenError> {
    let word: Word = "M<y_2feh*x_51h*d_6f2h*p_199553794*l_2*t_1>".parse()?;
    let parsed: Vec<(Tag, u64)> = word.atoms().iter().map(|a| (a.tag, a.value)).collect();
    assert_eq!(
        parsed,
        vec![
            (Tag::Y, 0x2fe),
            (Tag::X, 0x51),
            (Tag::D, 0x6f2),
            (Tag::P, 199_553_794),
            (Tag::L, 2),
            (Tag::T, 1),
        ]
    );
    assert_eq!(word.len(), 6);
    Ok(())
}

#[test]
fn unit_factors_are_dropped() -> Result<(), MgenError> {
    let word = Word::parse("M<1*x_1000h*1>")?;
    assert_eq!(word.to_string(), "M<x_1000h>");
    Ok(())
}

#[test]
fn concatenation_joins_atoms() -> Result<(), MgenError> {
    let a = Word::parse("M<x_1000h>")?;
    let b = Word::parse("M<d_200h*l_1>")?;
    assert_eq!(a.concat(&b).to_string(), "M<x_1000h*d_200h*l_1>");
    assert_eq!(Word::identity().concat(&a), a);
    Ok(())
}

fn code_of(text: &str) -> String {
    match Word::parse(text) {
        Ok(word) => panic!("expected failure for {text}, got {word}"),
        Err(err) => {
            assert!(matches!(err, MgenError::Word(_)));
            err.code().to_string()
        }
    }
}

#[test]
fn malformed_words_report_precise_codes() {
    assert_eq!(code_of("x_1000h"), "missing-frame");
    assert_eq!(code_of("M<x_1000h"), "missing-frame");
    assert_eq!(code_of("M<x_1h**y_2h>"), "empty-atom");
    assert_eq!(code_of("M<x1000h>"), "missing-separator");
    assert_eq!(code_of("M<q_1>"), "unknown-tag");
    assert_eq!(code_of("M<xy_1>"), "unknown-tag");
    assert_eq!(code_of("M<x_zzh>"), "bad-value");
    assert_eq!(code_of("M<p_12a>"), "bad-value");
    assert_eq!(code_of("M<l_3>"), "value-range");
    assert_eq!(code_of("M<d_1000h>"), "value-range");
    assert_eq!(code_of("M<x_2000h>"), "value-range");
    assert_eq!(code_of("M<p_244823040>"), "value-range");
}

#[test]
fn errors_carry_the_atom_index() {
    let err = Word::parse("M<x_1h*y_2h*t_7>").unwrap_err();
    assert_eq!(err.code(), "value-range");
    assert_eq!(err.info().context.get("atom").map(String::as_str), Some("2"));
    assert_eq!(
        err.info().context.get("text").map(String::as_str),
        Some("t_7")
    );
}

#[test]
fn words_serialize_as_their_text_form() {
    let word = Word::parse("M<y_0a7h*x_51fh*p_43929380*l_2>").unwrap();
    let json = serde_json::to_string(&word).unwrap();
    assert_eq!(json, "\"M<y_0a7h*x_51fh*p_43929380*l_2>\"");
    let back: Word = serde_json::from_str(&json).unwrap();
    assert_eq!(back, word);
    assert!(serde_json::from_str::<Word>("\"M<w_1>\"").is_err());
}
