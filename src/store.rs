// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::{ExpenseDraft, ExpenseRecord, Ledger};

pub fn data_dir() -> Result<PathBuf> {
    let proj = ProjectDirs::from("com.alphavelocity", "Khata", "khata")
        .context("Could not determine platform-specific data dir")?;
    let dir = proj.data_dir().to_path_buf();
    fs::create_dir_all(&dir).context("Failed to create data dir")?;
    Ok(dir)
}

pub fn data_path() -> Result<PathBuf> {
    Ok(data_dir()?.join("expenses.json"))
}

pub fn catalog_path() -> Result<PathBuf> {
    Ok(data_dir()?.join("catalog.json"))
}

/// Reads the persisted collection. A missing, unreadable, or malformed file
/// yields an empty collection; the store never refuses to start.
pub fn load_records(path: &Path) -> Vec<ExpenseRecord> {
    match fs::read_to_string(path) {
        Ok(text) => serde_json::from_str(&text).unwrap_or_default(),
        Err(_) => Vec::new(),
    }
}

/// Owns the authoritative collection and its persisted file. Every mutation
/// rewrites the whole file; there is no incremental path.
#[derive(Debug)]
pub struct Store {
    path: PathBuf,
    ledger: Ledger,
}

impl Store {
    pub fn open(path: impl Into<PathBuf>) -> Store {
        let path = path.into();
        let ledger = Ledger::from_records(load_records(&path));
        Store { path, ledger }
    }

    pub fn open_default() -> Result<Store> {
        Ok(Store::open(data_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn records(&self) -> &[ExpenseRecord] {
        self.ledger.records()
    }

    pub fn find(&self, id: i64) -> Option<&ExpenseRecord> {
        self.ledger.find(id)
    }

    pub fn insert(&mut self, draft: ExpenseDraft) -> Result<i64> {
        let id = self.ledger.insert(draft);
        self.save()?;
        Ok(id)
    }

    /// Batch insert with a single rewrite at the end; used by the importer.
    pub fn insert_many(&mut self, drafts: Vec<ExpenseDraft>) -> Result<Vec<i64>> {
        let ids = drafts
            .into_iter()
            .map(|d| self.ledger.insert(d))
            .collect::<Vec<_>>();
        self.save()?;
        Ok(ids)
    }

    pub fn update(&mut self, id: i64, draft: ExpenseDraft) -> Result<bool> {
        let changed = self.ledger.update(id, draft);
        if changed {
            self.save()?;
        }
        Ok(changed)
    }

    pub fn delete(&mut self, id: i64) -> Result<bool> {
        let removed = self.ledger.delete(id);
        if removed {
            self.save()?;
        }
        Ok(removed)
    }

    fn save(&self) -> Result<()> {
        let text = serde_json::to_string_pretty(self.ledger.records())?;
        fs::write(&self.path, text)
            .with_context(|| format!("Write store at {}", self.path.display()))?;
        Ok(())
    }
}
