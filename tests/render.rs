use gregory::{
    CalendarDate, CaseMode, Config, DateRange, Generator, NameTable, RenderOptions, RenderedLines, validate,
};
use rstest::rstest;

fn date(s: &str) -> CalendarDate {
    s.parse().unwrap()
}

fn as_rendered(divider: &str) -> RenderOptions {
    RenderOptions {
        divider:          divider.to_owned(),
        case:             CaseMode::AsRendered,
        allow_duplicates: false,
    }
}

#[rstest]
#[case("DMY", "", "01022003")]
#[case("dMY", "", "1022003")]
#[case("dmy", "", "1203")]
#[case("Ymd", "", "200321")]
#[case("DBY", "", "01February2003")]
#[case("DbY", "", "01Feb2003")]
#[case("A", "", "Saturday")]
#[case("aDb", " ", "Sat 01 Feb")]
#[case("dmy", "-", "1-2-03")]
#[case("YMD", "/", "2003/02/01")]
fn renders_reference_date(#[case] token: &str, #[case] divider: &str, #[case] expected: &str) {
    let specs = validate(&[token]).unwrap();
    let names = NameTable::english();
    assert_eq!(specs[0].render(&date("2003-02-01"), divider, &names), expected);
}

#[rstest]
#[case(CaseMode::Lower, "01february2003")]
#[case(CaseMode::AsRendered, "01February2003")]
#[case(CaseMode::Upper, "01FEBRUARY2003")]
fn case_modes(#[case] case: CaseMode, #[case] expected: &str) {
    let range = DateRange::new(date("2003-02-01"), date("2003-02-02")).unwrap();
    let specs = validate(&["DBY"]).unwrap();
    let options = RenderOptions {
        case,
        ..RenderOptions::default()
    };
    let names = NameTable::english();

    let lines: Vec<_> = RenderedLines::new(&range, &specs, &options, &names).collect();
    assert_eq!(lines, [expected]);
}

#[rstest]
#[case(false, 1)]
#[case(true, 2)]
fn collapsing_formats(#[case] twins: bool, #[case] expected: usize) {
    let mut config = Config::new(date("2003-02-15"), date("2003-02-16"));
    config.formats = vec!["dmy".into(), "Dmy".into()];
    config.allow_duplicates = twins;

    let generator = Generator::from_config(&config).unwrap();
    assert_eq!(generator.lines().count(), expected);
}

#[test]
fn divider_only_between_fields() {
    let range = DateRange::new(date("2003-01-01"), date("2004-01-01")).unwrap();
    let specs = validate(&["dmy"]).unwrap();
    let names = NameTable::english();
    let options = as_rendered("-");

    for line in RenderedLines::new(&range, &specs, &options, &names) {
        assert_eq!(line.matches('-').count(), 2, "{line}");
        assert!(!line.starts_with('-') && !line.ends_with('-'), "{line}");
    }
}

#[test]
fn identical_runs_are_identical() {
    let config = Config::new(date("2000-02-20"), date("2000-03-10"));
    let first = Generator::from_config(&config).unwrap();
    let second = Generator::from_config(&config).unwrap();

    let mut a = Vec::new();
    let mut b = Vec::new();
    first.run(&mut a).unwrap();
    second.run(&mut b).unwrap();

    assert!(!a.is_empty());
    assert_eq!(a, b);
}

#[test]
fn no_line_repeats_without_twins() {
    let config = Config::new(date("2001-01-01"), date("2001-03-01"));
    let generator = Generator::from_config(&config).unwrap();

    let mut seen = std::collections::HashSet::new();
    for line in generator.lines() {
        assert!(seen.insert(line.clone()), "repeated line {line}");
    }
}

#[test]
fn stats_add_up() {
    let config = Config::new(date("2001-01-01"), date("2001-01-11"));
    let generator = Generator::from_config(&config).unwrap();

    let mut lines = generator.lines();
    let emitted = lines.by_ref().count();
    let stats = lines.stats();

    assert_eq!(stats.dates, 10);
    assert_eq!(stats.rendered, generator.estimate().total_lines);
    assert_eq!(stats.emitted, emitted);
    assert_eq!(stats.emitted + stats.duplicates, stats.rendered);
}
