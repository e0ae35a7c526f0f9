// Copyright (c) 2026 the font-kiln contributors.
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt::Display;
use std::fs;
use std::path::PathBuf;
use std::process::exit;

use clap::Parser;
use font_kiln::definition::FontDefinition;
use tracing::{debug, info};
use yacexits::{EX_CANTCREAT, EX_DATAERR, EX_NOINPUT, EX_OK};

pub struct CommandError {
    message: String,
    exit_code: u32,
}

trait ToCommandError<T, E> {
    fn to_command_error<C: Display>(self, context: C, exit_code: u32) -> Result<T, CommandError>;
}

impl<T, E> ToCommandError<T, E> for Result<T, E>
where
    E: Display,
{
    fn to_command_error<C: Display>(self, context: C, exit_code: u32) -> Result<T, CommandError> {
        match self {
            Ok(ok) => Ok(ok),
            Err(e) => Err(CommandError {
                message: format!("{}: {}", context, e),
                exit_code,
            }),
        }
    }
}

pub type CommandResult<T> = Result<T, CommandError>;

/// Bakes a character-bitmap definition into a PNG glyph atlas and a
/// BMFont XML descriptor.
#[derive(Debug, Parser)]
pub struct Args {
    /// Path to the JSON definition file.
    pub definition: PathBuf,

    /// Directory to write the atlas image and descriptor into.
    pub out_dir: PathBuf,
}

fn main() {
    let args = Args::parse();
    font_kiln::init_logging();
    match run(args) {
        Ok(()) => exit(EX_OK as i32),
        Err(e) => {
            eprintln!("ERROR: {}", e.message);
            exit(e.exit_code as i32)
        }
    }
}

fn run(args: Args) -> CommandResult<()> {
    debug!("loading definition from {:?}", args.definition);
    let bytes = fs::read(&args.definition).to_command_error("reading definition", EX_NOINPUT)?;

    let definition =
        FontDefinition::from_json(&bytes).to_command_error("parsing definition", EX_DATAERR)?;

    // Both artifacts are fully materialized before the first write, so
    // a failed run never leaves partial output behind.
    let artifacts = font_kiln::bake(&definition).to_command_error("baking font", EX_DATAERR)?;

    let image_path = args.out_dir.join(format!("{}.png", definition.name));
    let descriptor_path = args.out_dir.join(format!("{}.fnt", definition.name));

    fs::write(&image_path, &artifacts.image_png)
        .to_command_error("writing atlas image", EX_CANTCREAT)?;
    fs::write(&descriptor_path, &artifacts.descriptor_xml)
        .to_command_error("writing descriptor", EX_CANTCREAT)?;

    info!("wrote {:?} and {:?}", image_path, descriptor_path);
    Ok(())
}
