//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use git2::{Oid, Repository, Signature};
use serde_json::{Value, json};

use smart_commit::confirm::{Choice, Interaction};
use smart_commit::error::InteractionError;
use smart_commit::host::PENDING_MESSAGE_FILE;

/// A completion response carrying a single candidate.
pub fn completion_body(text: &str) -> Value {
    json!({
        "id": "gen-123",
        "model": "openai/gpt-3.5-turbo",
        "choices": [
            { "index": 0, "text": text, "finish_reason": "stop" }
        ]
    })
}

/// A test git repository builder for integration tests.
pub struct TestRepo {
    pub dir: tempfile::TempDir,
    pub repo: Repository,
}

impl TestRepo {
    /// Create a new empty git repository in a temp directory.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let repo = Repository::init(dir.path()).expect("Failed to init git repo");
        Self { dir, repo }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `content` to `name` in the working tree without staging it.
    pub fn write_file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        std::fs::write(path, content).expect("Failed to write test file");
    }

    /// Commit the current content of `name`. Returns the commit OID.
    pub fn commit_file(&self, name: &str, message: &str) -> Oid {
        let sig = Signature::now("Test User", "test@example.com").expect("Failed to create signature");

        let mut index = self.repo.index().expect("Failed to get index");
        index.add_path(Path::new(name)).expect("Failed to add file");
        index.write().expect("Failed to write index");
        let tree_id = index.write_tree().expect("Failed to write tree");
        let tree = self.repo.find_tree(tree_id).expect("Failed to find tree");

        let parent = self.repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .expect("Failed to create commit")
    }

    /// Path of the pending commit message file.
    pub fn pending_message_path(&self) -> PathBuf {
        self.repo.path().join(PENDING_MESSAGE_FILE)
    }

    /// The pending commit message without its trailing newline, if one has
    /// been written.
    pub fn pending_message(&self) -> Option<String> {
        let content = std::fs::read_to_string(self.pending_message_path()).ok()?;
        Some(content.strip_suffix('\n').unwrap_or(&content).to_string())
    }

    pub fn set_pending_message(&self, message: &str) {
        std::fs::write(self.pending_message_path(), message)
            .expect("Failed to write pending message");
    }
}

/// Interaction that answers from a fixed script and records what it was shown.
pub struct ScriptedInteraction {
    secret: Option<String>,
    choice: Choice,
    edited: Option<String>,
    pub shown: Mutex<Vec<String>>,
}

impl ScriptedInteraction {
    pub fn choosing(choice: Choice) -> Self {
        Self {
            secret: None,
            choice,
            edited: None,
            shown: Mutex::new(Vec::new()),
        }
    }

    pub fn with_secret(mut self, secret: &str) -> Self {
        self.secret = Some(secret.to_string());
        self
    }

    pub fn with_edit(mut self, edited: &str) -> Self {
        self.edited = Some(edited.to_string());
        self
    }

    pub fn shown(&self) -> Vec<String> {
        self.shown.lock().expect("poisoned").clone()
    }
}

impl Interaction for ScriptedInteraction {
    fn prompt_secret(&self, prompt: &str) -> Result<Option<String>, InteractionError> {
        self.shown.lock().expect("poisoned").push(prompt.to_string());
        Ok(self.secret.clone())
    }

    fn choose(&self, message: &str) -> Result<Choice, InteractionError> {
        self.shown.lock().expect("poisoned").push(message.to_string());
        Ok(self.choice)
    }

    fn edit(&self, initial: &str) -> Result<Option<String>, InteractionError> {
        self.shown.lock().expect("poisoned").push(initial.to_string());
        Ok(self.edited.clone())
    }
}
