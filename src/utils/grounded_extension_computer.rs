use crate::aa::{AAFramework, IdSet, LabelType};
use log::trace;

/// Computes the identifiers of the arguments of the grounded extension of an AF.
///
/// Unattacked arguments are accepted first.
/// Each time an argument is accepted, the arguments it attacks are defeated,
/// and the arguments whose attackers are all defeated are accepted in turn.
pub(crate) fn grounded_extension<T>(af: &AAFramework<T>) -> IdSet
where
    T: LabelType,
{
    let id_bound = af.argument_set().id_bound();
    let mut ext = vec![];
    let mut defeated_args = vec![false; id_bound];
    let mut attacked_by = vec![0; id_bound];
    af.argument_ids().for_each(|id| {
        attacked_by[id] = af.attacker_ids(id).len();
        if attacked_by[id] == 0 {
            ext.push(id);
        }
    });
    let mut n_processed_args = 0;
    while n_processed_args < ext.len() {
        let id = ext[n_processed_args];
        af.target_ids(id).iter().for_each(|defeated| {
            if !defeated_args[*defeated] {
                defeated_args[*defeated] = true;
                af.target_ids(*defeated).iter().for_each(|attacked| {
                    attacked_by[*attacked] -= 1;
                    if attacked_by[*attacked] == 0 {
                        ext.push(*attacked);
                    }
                })
            }
        });
        n_processed_args += 1;
    }
    trace!("grounded extension has {} argument(s)", ext.len());
    ext.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_grounded_extension_1() {
        let af = AAFramework::new_with_arguments_and_attacks(
            &["a", "b", "c", "d", "e", "f"],
            &[
                ["a", "b"],
                ["b", "c"],
                ["b", "d"],
                ["c", "e"],
                ["d", "e"],
                ["e", "f"],
            ],
        )
        .unwrap();
        let grounded = af.labels_of(&grounded_extension(&af));
        assert_eq!(BTreeSet::from(["a", "c", "d", "f"]), grounded)
    }

    #[test]
    fn test_grounded_extension_2() {
        let af = AAFramework::new_with_attacks(&[
            ["x", "a"],
            ["a", "b"],
            ["b", "c"],
            ["b", "d"],
            ["c", "e"],
            ["d", "e"],
            ["e", "f"],
        ])
        .unwrap();
        let grounded = af.labels_of(&grounded_extension(&af));
        assert_eq!(BTreeSet::from(["b", "e", "x"]), grounded)
    }

    #[test]
    fn test_grounded_extension_after_removal() {
        let mut af = AAFramework::new_with_attacks(&[["x", "a"], ["a", "b"]]).unwrap();
        af.remove_argument(&"x");
        let grounded = af.labels_of(&grounded_extension(&af));
        assert_eq!(BTreeSet::from(["a"]), grounded)
    }

    #[test]
    fn test_grounded_extension_of_cycle() {
        let af = AAFramework::new_with_attacks(&[["a", "b"], ["b", "a"], ["c", "c"]]).unwrap();
        assert!(grounded_extension(&af).is_empty());
    }
}
