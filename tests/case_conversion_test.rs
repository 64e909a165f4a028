use nullsafe::utils::case::{
    camel_case, convert, kebab_case, lower_case, pascal_case, snake_case, start_case, upper_case,
    words,
};
use nullsafe::CaseStyle;
use proptest::prelude::*;

fn lowered(input: &str) -> Vec<String> {
    words(Some(input)).iter().map(|w| w.to_lowercase()).collect()
}

fn split_lowered(rendered: &str, separator: char) -> Vec<String> {
    rendered
        .split(separator)
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect()
}

#[test]
fn test_hello_world_in_every_style() {
    let input = Some("helloWorld");
    assert_eq!(camel_case(input), "helloWorld");
    assert_eq!(pascal_case(input), "HelloWorld");
    assert_eq!(kebab_case(input), "hello-world");
    assert_eq!(snake_case(input), "hello_world");
    assert_eq!(start_case(input), "Hello World");
    assert_eq!(lower_case(input), "hello world");
    assert_eq!(upper_case(input), "HELLO WORLD");
}

#[test]
fn test_digits_form_their_own_words() {
    assert_eq!(camel_case(Some("hello world 123")), "helloWorld123");
    assert_eq!(start_case(Some("123 hello world")), "123 Hello World");
    assert_eq!(kebab_case(Some("version2Release10")), "version-2-release-10");
}

#[test]
fn test_acronym_handling() {
    assert_eq!(kebab_case(Some("ABCWorld")), "abc-world");
    assert_eq!(snake_case(Some("XMLHttpRequest")), "xml_http_request");
    assert_eq!(camel_case(Some("parseHTMLString")), "parseHtmlString");
    assert_eq!(start_case(Some("fooBAR")), "Foo Bar");
    assert_eq!(upper_case(Some("userID")), "USER ID");
}

#[test]
fn test_mixed_separators() {
    assert_eq!(camel_case(Some("__FOO_BAR__")), "fooBar");
    assert_eq!(camel_case(Some("--foo-bar--")), "fooBar");
    assert_eq!(snake_case(Some("foo.bar/baz")), "foo_bar_baz");
    assert_eq!(start_case(Some("  multiple   spaces ")), "Multiple Spaces");
}

#[test]
fn test_absent_and_empty_inputs() {
    for style in CaseStyle::ALL {
        assert_eq!(convert(None, style), "", "style {style}");
        assert_eq!(convert(Some(""), style), "", "style {style}");
        assert_eq!(convert(Some(" -_. "), style), "", "style {style}");
    }
}

#[test]
fn test_single_character() {
    assert_eq!(camel_case(Some("A")), "a");
    assert_eq!(start_case(Some("a")), "A");
    assert_eq!(kebab_case(Some("7")), "7");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    // --- Separator-joined styles share one word sequence ---
    #[test]
    fn separated_styles_agree_on_words(input in "[a-zA-Z0-9 _.-]{0,32}") {
        let expected = lowered(&input);
        prop_assert_eq!(&split_lowered(&kebab_case(Some(&input)), '-'), &expected);
        prop_assert_eq!(&split_lowered(&snake_case(Some(&input)), '_'), &expected);
        prop_assert_eq!(&split_lowered(&start_case(Some(&input)), ' '), &expected);
        prop_assert_eq!(&split_lowered(&lower_case(Some(&input)), ' '), &expected);
        prop_assert_eq!(&split_lowered(&upper_case(Some(&input)), ' '), &expected);
    }

    // --- camelCase and PascalCase join the same words without separators ---
    #[test]
    fn joined_styles_agree_on_words(input in "[a-zA-Z0-9 _.-]{0,32}") {
        let joined = lowered(&input).concat();
        prop_assert_eq!(camel_case(Some(&input)).to_lowercase(), joined.clone());
        prop_assert_eq!(pascal_case(Some(&input)).to_lowercase(), joined);
    }

    // --- Multi-letter lowercase words survive a camelCase round trip ---
    #[test]
    fn camel_case_retokenizes_lowercase_words(input in "[a-z]{2,6}( [a-z]{2,6}){0,4}") {
        let expected = lowered(&input);
        prop_assert_eq!(lowered(&camel_case(Some(&input))), expected.clone());
        prop_assert_eq!(lowered(&pascal_case(Some(&input))), expected);
    }

    // --- Start case is idempotent ---
    #[test]
    fn start_case_is_idempotent(input in "[a-zA-Z ]{0,32}") {
        let once = start_case(Some(&input));
        prop_assert_eq!(start_case(Some(&once)), once);
    }

    // --- Every style renders the same number of words ---
    #[test]
    fn word_count_is_style_independent(input in "[a-zA-Z0-9 _-]{0,32}") {
        let count = words(Some(&input)).len();
        prop_assert_eq!(split_lowered(&kebab_case(Some(&input)), '-').len(), count);
        prop_assert_eq!(split_lowered(&snake_case(Some(&input)), '_').len(), count);
        prop_assert_eq!(split_lowered(&start_case(Some(&input)), ' ').len(), count);
    }

    // --- Tokenizing arbitrary text never panics and never yields empty words ---
    #[test]
    fn words_are_never_empty(input in any::<String>()) {
        for word in words(Some(&input)) {
            prop_assert!(!word.is_empty());
        }
        for style in CaseStyle::ALL {
            let _ = convert(Some(&input), style);
        }
    }
}
