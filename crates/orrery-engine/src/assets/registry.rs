use std::collections::HashMap;
use crate::api::types::TextureId;
use crate::assets::manifest::{AssetManifest, TextureDescriptor};

/// Registry of textures by path, backed by the manifest sent to the host.
/// Registering the same path twice returns the same `TextureId`.
pub struct TextureRegistry {
    manifest: AssetManifest,
    by_path: HashMap<String, TextureId>,
}

impl TextureRegistry {
    pub fn new() -> Self {
        Self {
            manifest: AssetManifest::default(),
            by_path: HashMap::new(),
        }
    }

    /// Register a texture and return its handle.
    pub fn register(&mut self, name: &str, path: &str) -> TextureId {
        if let Some(&id) = self.by_path.get(path) {
            return id;
        }
        let id = TextureId(self.manifest.textures.len() as u32);
        self.manifest.textures.push(TextureDescriptor {
            name: name.to_owned(),
            path: path.to_owned(),
            srgb: true,
        });
        self.by_path.insert(path.to_owned(), id);
        log::debug!("texture {:?} registered: {}", id, path);
        id
    }

    /// Point an already registered texture (by name) at a new path, e.g. a CDN
    /// location supplied by the host. The `TextureId` does not change.
    pub fn set_path(&mut self, name: &str, path: &str) -> Option<TextureId> {
        let index = self.manifest.textures.iter().position(|t| t.name == name)?;
        let old = std::mem::replace(&mut self.manifest.textures[index].path, path.to_owned());
        let id = TextureId(index as u32);
        self.by_path.remove(&old);
        self.by_path.insert(path.to_owned(), id);
        Some(id)
    }

    /// Look up a texture by path. Returns None if not registered.
    pub fn get(&self, path: &str) -> Option<TextureId> {
        self.by_path.get(path).copied()
    }

    pub fn descriptor(&self, id: TextureId) -> Option<&TextureDescriptor> {
        self.manifest.textures.get(id.0 as usize)
    }

    pub fn manifest(&self) -> &AssetManifest {
        &self.manifest
    }

    pub fn len(&self) -> usize {
        self.manifest.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.manifest.textures.is_empty()
    }
}

impl Default for TextureRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_assigns_sequential_ids() {
        let mut reg = TextureRegistry::new();
        let a = reg.register("orange", "texture/texture_orange.jpg");
        let b = reg.register("jaune", "texture/texture_jaune.jpg");
        assert_eq!(a, TextureId(0));
        assert_eq!(b, TextureId(1));
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.descriptor(b).unwrap().name, "jaune");
    }

    #[test]
    fn duplicate_path_reuses_id() {
        let mut reg = TextureRegistry::new();
        let a = reg.register("one", "texture/texture_sale.jpg");
        let b = reg.register("two", "texture/texture_sale.jpg");
        assert_eq!(a, b);
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn set_path_keeps_id() {
        let mut reg = TextureRegistry::new();
        let id = reg.register("rouge", "texture/texture_rouge.jpg");
        assert_eq!(reg.set_path("rouge", "https://cdn.example/rouge.jpg"), Some(id));
        assert!(reg.get("texture/texture_rouge.jpg").is_none());
        assert_eq!(reg.get("https://cdn.example/rouge.jpg"), Some(id));
        assert!(reg.set_path("unknown", "x.jpg").is_none());
    }
}
