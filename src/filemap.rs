//! File-map normalization.
//!
//! Every firmware bundle declares which files it provides either as a plain
//! list (file keeps its name) or as explicit source → target renames. Both
//! forms normalize to the same ordered mapping here. Names are taken as-is;
//! callers supply target-relative paths in their final form.

use anyhow::{bail, Result};

/// Canonical ordered mapping from source file name to target file name.
///
/// Source names are unique. Insertion order carries no semantics but is
/// preserved so logging stays deterministic.
#[derive(Debug, Clone)]
pub struct FileMap {
    entries: Vec<(String, String)>,
}

impl FileMap {
    /// Identity mapping: every file keeps its name.
    pub fn from_list<I, S>(files: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_pairs(files.into_iter().map(|f| {
            let f = f.into();
            (f.clone(), f)
        }))
    }

    /// Explicit source → target mapping, preserved unchanged.
    pub fn from_pairs<I, S, T>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
        T: Into<String>,
    {
        let entries: Vec<(String, String)> = pairs
            .into_iter()
            .map(|(s, t)| (s.into(), t.into()))
            .collect();

        // Duplicate source names are a declaration bug; catch them when the
        // registry is built, not when the bundle is gathered.
        for (i, (source, _)) in entries.iter().enumerate() {
            if entries[..i].iter().any(|(seen, _)| seen == source) {
                bail!("duplicate source file '{source}' in file map");
            }
        }

        Ok(Self { entries })
    }

    /// Iterate `(source, target)` pairs in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(s, t)| (s.as_str(), t.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_normalizes_to_identity() {
        let map = FileMap::from_list(["a.bin", "sub/b.bin"]).unwrap();
        assert_eq!(map.len(), 2);
        assert!(!map.is_empty());
        let entries: Vec<_> = map.entries().collect();
        assert_eq!(entries, vec![("a.bin", "a.bin"), ("sub/b.bin", "sub/b.bin")]);
    }

    #[test]
    fn empty_list_normalizes_to_empty_map() {
        let map = FileMap::from_list([] as [&str; 0]).unwrap();
        assert!(map.is_empty());
        assert_eq!(map.len(), 0);
    }

    #[test]
    fn pairs_preserved_unchanged() {
        let map = FileMap::from_pairs([("MCFG/x.1", "configs/x.mbn"), ("y", "y2")]).unwrap();
        let entries: Vec<_> = map.entries().collect();
        assert_eq!(
            entries,
            vec![("MCFG/x.1", "configs/x.mbn"), ("y", "y2")]
        );
    }

    #[test]
    fn duplicate_source_rejected() {
        let err = FileMap::from_pairs([("a", "x"), ("a", "y")]).unwrap_err();
        assert!(err.to_string().contains("duplicate source file 'a'"));
    }

    #[test]
    fn order_is_declaration_order() {
        let map = FileMap::from_list(["z", "a", "m"]).unwrap();
        let sources: Vec<_> = map.entries().map(|(s, _)| s).collect();
        assert_eq!(sources, vec!["z", "a", "m"]);
    }
}
