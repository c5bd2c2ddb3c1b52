use anyhow::anyhow;
use clap::Parser;
use rs_model_loader::{
    asset_manager::{AssetManager, ETextureState},
    assimp_importer::AssimpImporter,
    logger::{Logger, LoggerConfiguration},
    material::ETextureChannel,
    model::Model,
    model_loader::ModelLoader,
    settings::Settings,
};
use strum::IntoEnumIterator;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
struct Cli {
    input_file: String,
    #[arg(short, long)]
    settings: Option<std::path::PathBuf>,
    #[arg(long, default_value_t = false)]
    log_to_file: bool,
    #[arg(long, default_value_t = false)]
    wait_textures: bool,
}

fn print_model(model: &Model, asset_manager: &AssetManager) {
    log::info!(
        "{} ({}): {} meshes, {} bones",
        model.get_name(),
        model.get_directory(),
        model.get_meshes().len(),
        model.get_bone_count()
    );
    for (index, mesh) in model.get_meshes().iter().enumerate() {
        log::info!(
            "Mesh {}: {} vertices, {} indices, skinned: {}",
            index,
            mesh.get_vertex_count(),
            mesh.get_indices().len(),
            mesh.is_skinned()
        );
        for channel in ETextureChannel::iter() {
            let Some(texture) = mesh.get_material().get_texture(channel) else {
                continue;
            };
            let state = asset_manager
                .get_texture_state(texture)
                .unwrap_or(ETextureState::Failed);
            log::info!("    {:?}: {:?}", channel, state);
        }
    }
    let mut bones: Vec<_> = model.get_bone_data_map().iter().collect();
    bones.sort_by_key(|(_, bone_data)| bone_data.bone_id);
    for (name, bone_data) in bones {
        log::info!("Bone {}: {}", bone_data.bone_id, name);
    }
}

fn inspect(cli: Cli) -> anyhow::Result<()> {
    let settings = match &cli.settings {
        Some(path) => Settings::from_file(path)?,
        None => Settings::default(),
    };
    let mut asset_manager = AssetManager::new(&settings.asset_setting)?;
    let loader = ModelLoader::new(settings);
    let model = loader.try_load_model(&cli.input_file, &AssimpImporter::new(), &mut asset_manager)?;
    if model.is_empty() {
        return Err(anyhow!("{} contains no mesh", cli.input_file));
    }
    if cli.wait_textures {
        asset_manager.wait_idle();
    } else {
        asset_manager.update();
    }
    print_model(&model, &asset_manager);
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let logger = Logger::new(LoggerConfiguration {
        is_write_to_file: cli.log_to_file,
        is_flush_before_drop: true,
    });
    if let Err(err) = inspect(cli) {
        log::error!("{}", err);
        logger.flush();
        std::process::exit(1);
    }
}
