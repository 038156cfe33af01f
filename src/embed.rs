use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use eyre::{Result, WrapErr};

use crate::asset::Asset;
use crate::golang::{write_asset_entry, write_table_footer, write_table_header};

#[derive(Debug, Parser)]
pub struct EmbedCommand {
    /// Path of the generated file.
    #[clap(long, env = "GOEMBED_OUT_PATH")]
    out_path: PathBuf,
    /// Package name of the generated file.
    #[clap(long, env = "GOEMBED_PACKAGE_NAME", default_value = "assets")]
    package_name: String,
    /// Build tag list of the generated file.
    #[clap(long, env = "GOEMBED_TAG_LIST", default_value = "")]
    tag_list: String,
    /// Variable name of the generated assets map.
    #[clap(long, env = "GOEMBED_ASSETS_VAR_NAME", default_value = "Assets")]
    assets_var_name: String,
    /// Prefix stripped from asset paths to form map keys.
    #[clap(long, env = "GOEMBED_ASSET_PATH_PREFIX", default_value = "")]
    asset_path_prefix: String,
    /// Files to embed. Directories are skipped.
    paths: Vec<PathBuf>,
}

impl EmbedCommand {
    pub fn run(self) -> Result<()> {
        let out = File::create(&self.out_path)
            .wrap_err_with(|| format!("creating out path {}", self.out_path.display()))?;
        let mut out = BufWriter::new(out);

        write_table_header(
            &mut out,
            &self.tag_list,
            &self.package_name,
            &self.assets_var_name,
        )?;

        // The footer lands on the failure path too; an aborted run leaves a
        // terminated table on disk.
        let entries = self.write_assets(&mut out);
        let finish = write_table_footer(&mut out).and_then(|()| out.flush());

        entries.and(finish.map_err(Into::into))
    }

    fn write_assets<W>(&self, mut out: W) -> Result<()>
    where
        W: Write,
    {
        for path in &self.paths {
            let info = fs::metadata(path)
                .wrap_err_with(|| format!("stating asset {}", path.display()))?;
            if info.is_dir() {
                continue;
            }

            let data = File::open(path)
                .wrap_err_with(|| format!("opening asset {}", path.display()))?;
            let asset = Asset {
                path: path.clone(),
                mod_time: info
                    .modified()
                    .wrap_err_with(|| format!("stating asset {}", path.display()))?,
                data,
            };

            write_asset_entry(
                &mut out,
                &asset.key(&self.asset_path_prefix),
                asset.unix_mod_time(),
                asset.data,
            )
            .wrap_err_with(|| format!("processing asset {}", path.display()))?;
        }

        Ok(())
    }
}
