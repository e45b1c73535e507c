//! Share broker minting `file://` locators for paths under registered
//! roots, mirroring a provider that only exposes pre-declared directories.

use std::path::{Component, Path, PathBuf};

use handoff_core::{AppIdentity, ShareBroker, ShareError, ShareGrant};
use tracing::debug;

/// Broker that refuses to mint grants for paths outside its roots.
#[derive(Debug, Clone)]
pub struct RootedShareBroker {
    roots: Vec<PathBuf>,
}

impl RootedShareBroker {
    /// Build a broker over the given shareable roots.
    #[must_use]
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }

    /// The registered shareable roots.
    #[must_use]
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Resolve `.`/`..` segments lexically. Refuses paths whose parent
    /// segments would climb above the path's own start.
    fn normalize(path: &Path) -> Result<PathBuf, ShareError> {
        let mut normalized = PathBuf::new();
        for component in path.components() {
            match component {
                Component::RootDir | Component::Prefix(_) | Component::Normal(_) => {
                    normalized.push(component.as_os_str());
                }
                Component::CurDir => {}
                Component::ParentDir => {
                    if !normalized.pop() {
                        return Err(ShareError::Traversal {
                            path: path.to_path_buf(),
                        });
                    }
                }
            }
        }
        Ok(normalized)
    }
}

impl ShareBroker for RootedShareBroker {
    fn mint(&self, owner: &AppIdentity, path: &Path) -> Result<ShareGrant, ShareError> {
        let normalized = Self::normalize(path)?;

        let root = self
            .roots
            .iter()
            .find(|root| normalized.starts_with(root))
            .ok_or_else(|| ShareError::OutsideRoots {
                path: normalized.clone(),
            })?;

        let rendered = normalized
            .to_str()
            .ok_or_else(|| ShareError::Unrepresentable {
                path: normalized.clone(),
            })?;

        debug!(owner = %owner, root = %root.display(), path = rendered, "minted share grant");
        Ok(ShareGrant {
            uri: format!("file://{rendered}"),
            path: normalized,
            read_only: true,
        })
    }
}
