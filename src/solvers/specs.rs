use crate::aa::LabelType;
use std::collections::BTreeSet;

/// A trait for solvers dedicated to semantics that may admit several extensions.
pub trait ExtensionsComputer<T>
where
    T: LabelType,
{
    /// Computes all the extensions.
    ///
    /// In case the semantics admits no extension for the framework, an empty set is returned.
    fn compute_extensions(&mut self) -> BTreeSet<BTreeSet<T>>;

    /// Checks whether a set of arguments is an extension.
    ///
    /// Solvers may answer this question without computing all the extensions.
    fn is_extension(&mut self, arguments: &BTreeSet<T>) -> bool;

    /// Checks the credulous acceptance of an argument, that is whether it belongs to at least one extension.
    fn is_credulously_accepted(&mut self, arg: &T) -> bool {
        self.compute_extensions().iter().any(|ext| ext.contains(arg))
    }

    /// Checks the skeptical acceptance of an argument, that is whether it belongs to each extension.
    ///
    /// If the semantics admits no extension, any argument is skeptically accepted.
    fn is_skeptically_accepted(&mut self, arg: &T) -> bool {
        self.compute_extensions().iter().all(|ext| ext.contains(arg))
    }
}

/// A trait for solvers dedicated to semantics that always admit exactly one extension.
pub trait UniqueExtensionComputer<T>
where
    T: LabelType,
{
    /// Computes the extension.
    fn compute_extension(&mut self) -> BTreeSet<T>;

    /// Checks whether an argument belongs to the extension.
    ///
    /// For such semantics, credulous and skeptical acceptance are the same problem.
    fn is_accepted(&mut self, arg: &T) -> bool {
        self.compute_extension().contains(arg)
    }
}
