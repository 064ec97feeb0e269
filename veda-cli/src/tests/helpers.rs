//! Test helpers for writing catalogue files and faking the environment.

use camino::{Utf8Path, Utf8PathBuf};
use std::{collections::HashMap, fs};
use tempfile::TempDir;

pub(super) const DATA_ELEMENTS_CSV: &str = "id,title,description,aliases,domain,translations\n\
     DE-1,Passport Number,Travel document,passport,Identity,{}\n\
     DE-2,Email Address,Mailbox,Contact\n\
     DE-3,Aadhaar Number,National id,UID,Identity,{broken\n";

pub(super) const PURPOSES_CSV: &str = "purpose_id,industry,sub_category,data_elements,eng\n\
     P-1,Finance,Lending,\"DE-1, DE-3\",Credit assessment\n\
     P-2,Retail,E-commerce,DE-2,Order delivery\n";

/// Catalogue files written into a temporary directory.
#[derive(Debug)]
pub(super) struct CatalogueFiles {
    _dir: TempDir,
    root: Utf8PathBuf,
    data_elements: Utf8PathBuf,
    purposes: Utf8PathBuf,
}

impl CatalogueFiles {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 tempdir");
        let data_elements = root.join("data_elements.csv");
        let purposes = root.join("purposes.csv");
        fs::write(&data_elements, DATA_ELEMENTS_CSV).expect("write data elements");
        fs::write(&purposes, PURPOSES_CSV).expect("write purposes");
        Self {
            _dir: dir,
            root,
            data_elements,
            purposes,
        }
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn data_elements(&self) -> &Utf8Path {
        &self.data_elements
    }

    pub(super) fn purposes(&self) -> &Utf8Path {
        &self.purposes
    }
}

/// An environment lookup backed by a fixed map.
pub(super) fn fake_env(
    pairs: &[(&str, &str)],
) -> impl Fn(&str) -> Option<String> + use<> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
        .collect();
    move |key: &str| vars.get(key).cloned()
}
