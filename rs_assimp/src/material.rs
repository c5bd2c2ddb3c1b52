use crate::{convert::ConvertToString, texture_type::TextureType};
use russimp_sys::*;
use std::{collections::HashMap, ffi::CString};
use strum::IntoEnumIterator;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Material {
    pub name: String,
    /// Texture paths per type, in Assimp's enumeration order.
    pub textures: HashMap<TextureType, Vec<String>>,
}

fn get_material_name(ai_material: &aiMaterial) -> Option<String> {
    let key = CString::new("?mat.name").ok()?;
    let mut name = aiString {
        length: 0,
        data: [0; 1024],
    };
    let status = unsafe { aiGetMaterialString(ai_material, key.as_ptr(), 0, 0, &mut name) };
    if status == aiReturn_aiReturn_SUCCESS {
        Some(name.to_string())
    } else {
        None
    }
}

fn get_material_textures(ai_material: &aiMaterial, texture_type: TextureType) -> Vec<String> {
    let mut paths = vec![];
    let count = unsafe { aiGetMaterialTextureCount(ai_material, texture_type as _) };
    for index in 0..count {
        let mut path = aiString {
            length: 0,
            data: [0; 1024],
        };
        let status = unsafe {
            aiGetMaterialTexture(
                ai_material,
                texture_type as _,
                index,
                &mut path,
                std::ptr::null_mut(),
                std::ptr::null_mut(),
                std::ptr::null_mut(),
                std::ptr::null_mut(),
                std::ptr::null_mut(),
                std::ptr::null_mut(),
            )
        };
        if status == aiReturn_aiReturn_SUCCESS {
            paths.push(path.to_string());
        } else {
            log::warn!("Can not read {:?} texture {}", texture_type, index);
        }
    }
    paths
}

impl Material {
    pub fn copy_from(ai_material: &aiMaterial) -> Material {
        let mut textures = HashMap::new();
        for texture_type in TextureType::iter() {
            let paths = get_material_textures(ai_material, texture_type);
            if !paths.is_empty() {
                textures.insert(texture_type, paths);
            }
        }
        Material {
            name: get_material_name(ai_material).unwrap_or_default(),
            textures,
        }
    }
}
