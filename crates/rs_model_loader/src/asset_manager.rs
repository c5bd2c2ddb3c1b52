use crate::{
    handle::{HandleManager, TextureHandle},
    settings::AssetSettings,
    texture::{TextureLoader, TextureSettings},
};
use std::{
    collections::HashMap,
    sync::{
        mpsc::{Receiver, Sender},
        Arc,
    },
};

struct LoadResult {
    id: u64,
    image: image::ImageResult<image::DynamicImage>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ETextureState {
    Loading,
    Loaded,
    Failed,
}

struct TextureEntry {
    handle: TextureHandle,
    path: String,
    settings: TextureSettings,
    state: ETextureState,
    image: Option<Arc<image::DynamicImage>>,
}

/// Owns every texture it hands out. Decoding runs on a dedicated thread pool, results are
/// collected on the owning thread by [`AssetManager::update`].
pub struct AssetManager {
    thread_pool: Arc<rayon::ThreadPool>,
    handle_manager: HandleManager,
    textures: HashMap<u64, TextureEntry>,
    cached_handles: HashMap<(String, bool), TextureHandle>,
    sender: Sender<LoadResult>,
    receiver: Receiver<LoadResult>,
    pending_count: usize,
}

impl AssetManager {
    pub fn new(settings: &AssetSettings) -> crate::error::Result<AssetManager> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .thread_name(|index| format!("Texture IO {index}"))
            .num_threads(settings.io_thread_count.max(1))
            .build()
            .map_err(|err| crate::error::Error::ThreadPool(err.to_string()))?;
        let (sender, receiver) = std::sync::mpsc::channel();
        Ok(AssetManager {
            thread_pool: Arc::new(thread_pool),
            handle_manager: HandleManager::new(),
            textures: HashMap::new(),
            cached_handles: HashMap::new(),
            sender,
            receiver,
            pending_count: 0,
        })
    }

    fn spawn_load(&self, id: u64, path: String) {
        let sender = self.sender.clone();
        self.thread_pool.spawn(move || {
            let _ = sender.send(LoadResult {
                id,
                image: image::open(path),
            });
        });
    }

    fn finish_load(&mut self, result: LoadResult) -> Option<TextureHandle> {
        self.pending_count = self.pending_count.saturating_sub(1);
        let entry = self.textures.get_mut(&result.id)?;
        match result.image {
            Ok(image) => {
                log::trace!("Texture loaded: {}", entry.path);
                entry.image = Some(Arc::new(image));
                entry.state = ETextureState::Loaded;
                Some(entry.handle.clone())
            }
            Err(err) => {
                log::warn!("Load texture {} failed, {}", entry.path, err);
                entry.state = ETextureState::Failed;
                None
            }
        }
    }

    /// Collects finished decodes without blocking and returns the textures that became ready.
    pub fn update(&mut self) -> Vec<TextureHandle> {
        let mut loaded = vec![];
        while let Ok(result) = self.receiver.try_recv() {
            if let Some(handle) = self.finish_load(result) {
                loaded.push(handle);
            }
        }
        loaded
    }

    /// Blocks until every requested texture has finished loading or failed.
    pub fn wait_idle(&mut self) -> Vec<TextureHandle> {
        let mut loaded = vec![];
        while self.pending_count > 0 {
            let Ok(result) = self.receiver.recv() else {
                break;
            };
            if let Some(handle) = self.finish_load(result) {
                loaded.push(handle);
            }
        }
        loaded
    }

    pub fn get_texture_state(&self, handle: &TextureHandle) -> Option<ETextureState> {
        self.textures.get(&**handle).map(|entry| entry.state)
    }

    pub fn get_texture_settings(&self, handle: &TextureHandle) -> Option<TextureSettings> {
        self.textures.get(&**handle).map(|entry| entry.settings)
    }

    pub fn get_texture_image(&self, handle: &TextureHandle) -> Option<Arc<image::DynamicImage>> {
        self.textures
            .get(&**handle)
            .and_then(|entry| entry.image.clone())
    }

    pub fn get_pending_count(&self) -> usize {
        self.pending_count
    }
}

impl TextureLoader for AssetManager {
    fn load_2d_texture_async(
        &mut self,
        path: &str,
        settings: &TextureSettings,
    ) -> Option<TextureHandle> {
        if path.is_empty() {
            return None;
        }
        let key = (path.to_string(), settings.is_srgb);
        if let Some(handle) = self.cached_handles.get(&key) {
            return Some(handle.clone());
        }
        let handle = self.handle_manager.next_texture();
        self.textures.insert(
            *handle,
            TextureEntry {
                handle: handle.clone(),
                path: path.to_string(),
                settings: *settings,
                state: ETextureState::Loading,
                image: None,
            },
        );
        self.cached_handles.insert(key, handle.clone());
        self.pending_count += 1;
        self.spawn_load(*handle, path.to_string());
        Some(handle)
    }
}

#[cfg(test)]
mod test {
    use super::{AssetManager, ETextureState};
    use crate::{
        settings::AssetSettings,
        test_logger,
        texture::{TextureLoader, TextureSettings},
    };

    fn temp_path(name: &str) -> String {
        std::env::temp_dir()
            .join(format!("rs_model_loader_{}_{}", std::process::id(), name))
            .to_string_lossy()
            .to_string()
    }

    #[test]
    fn test_case_load_texture() {
        let path = temp_path("albedo.png");
        image::RgbaImage::new(4, 2).save(&path).unwrap();

        let mut asset_manager = AssetManager::new(&AssetSettings::default()).unwrap();
        let handle = asset_manager
            .load_2d_texture_async(&path, &TextureSettings { is_srgb: true })
            .unwrap();
        let same = asset_manager
            .load_2d_texture_async(&path, &TextureSettings { is_srgb: true })
            .unwrap();
        assert_eq!(handle, same);

        let loaded = asset_manager.wait_idle();
        assert_eq!(loaded, vec![handle.clone()]);
        assert_eq!(
            asset_manager.get_texture_state(&handle),
            Some(ETextureState::Loaded)
        );
        assert!(asset_manager.get_texture_settings(&handle).unwrap().is_srgb);
        let image = asset_manager.get_texture_image(&handle).unwrap();
        assert_eq!(image.width(), 4);
        assert_eq!(image.height(), 2);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_case_missing_file() {
        test_logger::init();
        test_logger::clear();
        let mut asset_manager = AssetManager::new(&AssetSettings::default()).unwrap();
        let handle = asset_manager
            .load_2d_texture_async(&temp_path("missing.png"), &TextureSettings::default())
            .unwrap();
        assert_eq!(asset_manager.get_pending_count(), 1);
        let loaded = asset_manager.wait_idle();
        assert!(loaded.is_empty());
        assert_eq!(asset_manager.get_pending_count(), 0);
        assert_eq!(
            asset_manager.get_texture_state(&handle),
            Some(ETextureState::Failed)
        );
        assert!(asset_manager.get_texture_image(&handle).is_none());
        assert_eq!(test_logger::warnings().len(), 1);
    }

    #[test]
    fn test_case_empty_path() {
        let mut asset_manager = AssetManager::new(&AssetSettings::default()).unwrap();
        assert!(asset_manager
            .load_2d_texture_async("", &TextureSettings::default())
            .is_none());
        assert_eq!(asset_manager.get_pending_count(), 0);
    }
}
