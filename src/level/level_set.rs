use std::io::ErrorKind;
use std::path::Path;

use crate::error::LevelError;

const BUILT_IN: [(&str, &str); 3] = [
    ("level1.txt", include_str!("../../levels/level1.txt")),
    ("level2.txt", include_str!("../../levels/level2.txt")),
    ("level3.txt", include_str!("../../levels/level3.txt")),
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelEntry {
    pub source: String,
    pub text: String,
}

/// Ordered levels of a campaign. Indices are 1-based.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelSet {
    levels: Vec<LevelEntry>,
}

impl LevelSet {
    pub fn built_in() -> LevelSet {
        LevelSet {
            levels: BUILT_IN
                .iter()
                .map(|(source, text)| LevelEntry {
                    source: source.to_string(),
                    text: text.to_string(),
                })
                .collect(),
        }
    }

    pub fn from_texts<I, S>(texts: I) -> LevelSet
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        LevelSet {
            levels: texts
                .into_iter()
                .enumerate()
                .map(|(i, text)| LevelEntry {
                    source: format!("level{}", i + 1),
                    text: text.into(),
                })
                .collect(),
        }
    }

    /// Reads `level1.txt`, `level2.txt`, ... from `dir` up to the first missing index.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<LevelSet, LevelError> {
        let dir = dir.as_ref();
        let mut levels = Vec::new();
        for index in 1.. {
            let path = dir.join(format!("level{index}.txt"));
            match std::fs::read_to_string(&path) {
                Ok(text) => levels.push(LevelEntry {
                    source: path.display().to_string(),
                    text,
                }),
                Err(e) if e.kind() == ErrorKind::NotFound => break,
                Err(e) => {
                    return Err(LevelError::Unreadable {
                        path: path.display().to_string(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        if levels.is_empty() {
            return Err(LevelError::Unreadable {
                path: dir.join("level1.txt").display().to_string(),
                reason: "no levels found".to_string(),
            });
        }
        tracing::info!(count = levels.len(), dir = %dir.display(), "Loaded level set");
        Ok(LevelSet { levels })
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&LevelEntry, LevelError> {
        index
            .checked_sub(1)
            .and_then(|i| self.levels.get(i))
            .ok_or(LevelError::UnknownLevel {
                index,
                available: self.levels.len(),
            })
    }
}
