use assert_cmd::Command;
use dungaf::aa::Semantics;
use predicates::prelude::predicate;
use strum::IntoEnumIterator;

#[test]
fn test_semantics() {
    let expected = Semantics::iter()
        .map(|s| format!("{} {}\n", s.to_short_str(), s.as_ref()))
        .collect::<String>();
    let mut cmd = Command::cargo_bin("dungaf").unwrap();
    cmd.arg("semantics").arg("--logging-level").arg("off");
    cmd.assert()
        .success()
        .stdout(predicate::eq(expected.as_str()));
}

#[test]
fn test_names_are_accepted_back() {
    for s in Semantics::iter() {
        assert_eq!(s, Semantics::try_from(s.as_ref()).unwrap());
        assert_eq!(s, Semantics::try_from(s.to_short_str()).unwrap());
    }
}
