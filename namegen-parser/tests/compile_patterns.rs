//! Compiling and rendering complete patterns
//!
//! Each test compiles a pattern through the public API and checks the tree's
//! analysis and a batch of seeded renders.

use namegen_parser::namegen::testing::{assert_renders_one_of, assert_within_bounds, draw};
use namegen_parser::namegen::{
    compile, CompileError, CompileOptions, Compiler, Generator, Node, SymbolTable,
};
use rstest::rstest;

fn class_len(code: char) -> u128 {
    SymbolTable::builtin().get(code).unwrap().len() as u128
}

#[rstest]
#[case::literal_choice("(foo|bar)", 2, 3, 3)]
#[case::plain_literal("(foo)", 1, 3, 3)]
#[case::empty("", 1, 0, 0)]
#[case::empty_groups("<>()", 1, 0, 0)]
#[case::optional_suffix("(a)(|b)", 2, 1, 2)]
#[case::vowel_pair("vv", 36, 2, 2)]
#[case::literal_suffix("v(dim)", 6, 4, 4)]
fn test_analysis(
    #[case] pattern: &str,
    #[case] combinations: u128,
    #[case] min_length: usize,
    #[case] max_length: usize,
) {
    let tree = compile(pattern, true).unwrap();
    assert_eq!(tree.combinations(), combinations);
    assert_eq!(tree.min_length(), min_length);
    assert_eq!(tree.max_length(), max_length);
}

#[test]
fn test_literal_choice_renders() {
    let tree = compile("(foo|bar)", true).unwrap();
    assert_renders_one_of(&tree, &["foo", "bar"], 1000);
}

#[test]
fn test_symbol_choice_with_empty_alternative() {
    let tree = compile("<c|v|>", true).unwrap();
    assert_eq!(tree.combinations(), class_len('c') + class_len('v') + 1);
    assert_eq!(tree.min_length(), 0);
    assert_eq!(tree.max_length(), 1);
    for name in draw(&tree, 1000) {
        assert!(name.chars().count() <= tree.max_length());
    }
}

#[test]
fn test_empty_alternative_is_reachable() {
    let tree = compile("<c|v|>", true).unwrap();
    assert!(draw(&tree, 1000).iter().any(String::is_empty));
}

#[rstest]
#[case::capitalize("!(foo)", "Foo")]
#[case::reverse("~(foo)", "oof")]
#[case::capitalize_then_reverse("!~(foo)", "Oof")]
#[case::reverse_then_capitalize("~!(foo)", "ooF")]
#[case::capitalize_lowers_rest("!(fOO)", "Foo")]
#[case::sharp_s_kept("!(ßa)", "ßa")]
#[case::dotted_capital_kept("!(aİ)", "Aİ")]
#[case::operators_literal_in_parens("(!~)", "!~")]
#[case::collapse_to_one("(aaa)", "a")]
#[case::collapse_to_two("(ooo)", "oo")]
#[case::unknown_letters("<xz>", "xz")]
fn test_deterministic_renders(#[case] pattern: &str, #[case] expected: &str) {
    let tree = compile(pattern, true).unwrap();
    assert_renders_one_of(&tree, &[expected], 100);
}

#[test]
fn test_collapse_can_be_disabled() {
    let tree = compile("(aaa)", false).unwrap();
    assert_renders_one_of(&tree, &["aaa"], 10);
}

#[test]
fn test_capitalize_in_middle() {
    // a lowercase vowel followed by a capitalized syllable, like "eRod"
    let tree = compile("v!s", false).unwrap();
    for name in draw(&tree, 200) {
        let chars: Vec<char> = name.chars().collect();
        assert!(chars[0].is_lowercase());
        assert!(chars[1].is_uppercase());
        assert!(chars[2..].iter().all(|c| c.is_lowercase()));
    }
}

#[test]
fn test_reverse_whole_template() {
    let tree = compile("~<(abc)v>", false).unwrap();
    for name in draw(&tree, 100) {
        assert!(name.ends_with("cba"), "{}", name);
    }
}

#[test]
fn test_deep_nesting() {
    let tree = compile("(((((<(((((((((((((((a)))))))))))))))>)))))", true).unwrap();
    assert_renders_one_of(&tree, &["a"], 10);
}

#[rstest]
#[case::vowels("v")]
#[case::syllables("s")]
#[case::insult("i")]
#[case::greek("<s<v|V>(tia)|s<v|V>(os)|B<v|V>C(ios)|B<v|V><c|C>V(ios|os)>")]
#[case::pern("<<s|ss>|<VC|vC|B|BVs|Vs>><v|V|v|<V(l|n|r)|vc>>(th)")]
#[case::wrapped("!<~s|!(ab)V>'!d")]
#[case::expanding_case_maps("!(ß)<!(İa)|~!(straße)>")]
fn test_renders_within_bounds_without_collapse(#[case] pattern: &str) {
    let tree = compile(pattern, false).unwrap();
    assert_within_bounds(&tree, 1000);
}

#[rstest]
#[case::unclosed_literal("(foo", CompileError::UnclosedGroup { open_groups: 1, position: 0 })]
#[case::unclosed_symbol("<a", CompileError::UnclosedGroup { open_groups: 1, position: 0 })]
#[case::stray_paren("foo)", CompileError::UnbalancedBrackets { bracket: ')', position: 3 })]
#[case::stray_angle("a>", CompileError::UnbalancedBrackets { bracket: '>', position: 1 })]
#[case::paren_closes_angle("<foo)", CompileError::MismatchedBracketKind { expected: '>', found: ')', position: 4 })]
#[case::angle_closes_paren("(a>", CompileError::MismatchedBracketKind { expected: ')', found: '>', position: 2 })]
fn test_malformed_patterns(#[case] pattern: &str, #[case] expected: CompileError) {
    assert_eq!(compile(pattern, true), Err(expected));
}

#[test]
fn test_error_at_first_offending_character() {
    // The stray ')' is reported even though a '(' is left open afterwards
    assert!(matches!(
        compile("a)(", true),
        Err(CompileError::UnbalancedBrackets { position: 1, .. })
    ));
}

#[test]
fn test_structure_is_deterministic() {
    let pattern = "<s|B>V<c|C>(|ius|ia)";
    let first = compile(pattern, true).unwrap();
    let second = compile(pattern, true).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.analyze(), second.analyze());
}

#[test]
fn test_alternate_table() {
    let mut table = SymbolTable::new();
    table.insert('k', ["kay"]);
    let tree = Compiler::new(&table)
        .with_options(CompileOptions {
            collapse_triples: false,
            ..CompileOptions::default()
        })
        .compile("kv")
        .unwrap();
    assert_renders_one_of(&tree, &["kayv"], 20);
}

#[test]
fn test_generator_capitalize_first() {
    let generator = Generator::with_options(
        "(foo|bar)",
        CompileOptions {
            capitalize_first: true,
            ..CompileOptions::default()
        },
    )
    .unwrap();
    assert_renders_one_of(generator.root(), &["Foo", "Bar"], 100);
}

#[test]
fn test_empty_choice_node() {
    let tree = Node::Choice(vec![]);
    assert_eq!(tree.combinations(), 1);
    assert_eq!(tree.render(), "");
}
