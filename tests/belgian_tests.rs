use french_numerals::{Dialect, Formatter, to_french_words};

fn be(n: i64) -> String {
    to_french_words(n, Dialect::Belgian).unwrap()
}

#[test]
fn test_single_digits() {
    assert_eq!(be(0), "zéro");
    assert_eq!(be(1), "un");
    assert_eq!(be(5), "cinq");
}

#[test]
fn test_two_digits() {
    assert_eq!(be(10), "dix");
    assert_eq!(be(11), "onze");
    assert_eq!(be(15), "quinze");
    assert_eq!(be(20), "vingt");
    assert_eq!(be(21), "vingt-et-un");
    assert_eq!(be(35), "trente-cinq");
    assert_eq!(be(51), "cinquante-et-un");
    assert_eq!(be(68), "soixante-huit");
    assert_eq!(be(70), "septante");
    assert_eq!(be(71), "septante-et-un");
    assert_eq!(be(72), "septante-deux");
    assert_eq!(be(74), "septante-quatre");
    assert_eq!(be(75), "septante-cinq");
    assert_eq!(be(80), "huitante");
    assert_eq!(be(81), "huitante-et-un");
    assert_eq!(be(90), "nonante");
    assert_eq!(be(99), "nonante-neuf");
}

#[test]
fn test_three_digits() {
    assert_eq!(be(100), "cent");
    assert_eq!(be(101), "cent-un");
    assert_eq!(be(111), "cent-onze");
    assert_eq!(be(171), "cent-septante-et-un");
    assert_eq!(be(175), "cent-septante-cinq");
    assert_eq!(be(199), "cent-nonante-neuf");
    assert_eq!(be(200), "deux-cents");
    assert_eq!(be(201), "deux-cent-un");
    assert_eq!(be(555), "cinq-cent-cinquante-cinq");
    assert_eq!(be(999), "neuf-cent-nonante-neuf");
}

#[test]
fn test_thousands() {
    assert_eq!(be(1000), "mille");
    assert_eq!(be(1001), "mille-un");
    assert_eq!(be(2000), "deux-milles");
    assert_eq!(be(2021), "deux-mille-vingt-et-un");
    assert_eq!(be(9999), "neuf-mille-neuf-cent-nonante-neuf");
    assert_eq!(be(10000), "dix-milles");
    assert_eq!(
        be(654321),
        "six-cent-cinquante-quatre-mille-trois-cent-vingt-et-un"
    );
    assert_eq!(
        be(999999),
        "neuf-cent-nonante-neuf-mille-neuf-cent-nonante-neuf"
    );
}

#[test]
fn test_dialects_only_differ_from_seventy_to_ninety_nine() {
    let standard = Formatter::new(Dialect::Standard).unwrap();
    let belgian = Formatter::from_token("be").unwrap();
    assert_eq!(belgian.dialect(), Dialect::Belgian);

    for n in 0..100 {
        let same = standard.format(n).unwrap() == belgian.format(n).unwrap();
        assert_eq!(same, n < 70, "n = {n}");
    }
}
