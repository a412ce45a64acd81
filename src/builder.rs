use std::path::{Path, PathBuf};

use image::RgbImage;
use log::debug;

use crate::common::{Geometry, Gradient, ModuleMatrix, StyleConfig, StyleResult};
use crate::render::{apply_gradient, composite_logo_from_path, rasterize_modules};

pub struct StyleBuilder<'a> {
    data: &'a str,
    config: StyleConfig,
}

impl<'a> StyleBuilder<'a> {
    pub fn new(data: &'a str) -> Self {
        Self { data, config: StyleConfig::default() }
    }

    pub fn data(&mut self, data: &'a str) -> &mut Self {
        self.data = data;
        self
    }

    pub fn config(&mut self, config: StyleConfig) -> &mut Self {
        self.config = config;
        self
    }

    pub fn gradient(&mut self, gradient: Gradient) -> &mut Self {
        self.config.gradient = gradient;
        self
    }

    pub fn module_size(&mut self, module_size: u32) -> &mut Self {
        self.config.module_size = module_size;
        self
    }

    pub fn logo<P: Into<PathBuf>>(&mut self, path: P) -> &mut Self {
        self.config.logo = Some(path.into());
        self
    }

    pub fn no_logo(&mut self) -> &mut Self {
        self.config.logo = None;
        self
    }

    pub fn get_config(&self) -> &StyleConfig {
        &self.config
    }

    pub fn metadata(&self) -> String {
        let logo = self.config.logo.as_deref().map(Path::display);
        match logo {
            Some(l) => format!(
                "{{ Ec level: {:?}, Module size: {}, Logo: {l} }}",
                self.config.ec_level, self.config.module_size
            ),
            None => format!(
                "{{ Ec level: {:?}, Module size: {}, Logo: None }}",
                self.config.ec_level, self.config.module_size
            ),
        }
    }
}


impl StyleBuilder<'_> {
    /// Encodes the payload and renders the styled image.
    pub fn build(&self) -> StyleResult<RgbImage> {
        debug!("Generating styled QR {}...", self.metadata());

        debug!("Encoding data...");
        let matrix = ModuleMatrix::encode(self.data, self.config.ec_level)?;

        self.render_matrix(&matrix)
    }

    /// Renders an already encoded module matrix. Stages run in a fixed order: base render,
    /// gradient fill, dot rasterization over the corner eyes, logo.
    pub fn render_matrix(&self, matrix: &ModuleMatrix) -> StyleResult<RgbImage> {
        let cfg = &self.config;
        let geo = Geometry::new(matrix.width(), cfg)?;

        debug!("Validating geometry for {0}x{0} modules...", matrix.width());
        geo.validate()?;

        debug!("Rendering base image...");
        let base = matrix.render(cfg.module_size, cfg.border_modules);

        debug!("Applying gradient...");
        let grad_img = apply_gradient(&base, &geo, &cfg.gradient, cfg.dark_threshold);

        debug!("Drawing corner eyes & module dots...");
        let dots = rasterize_modules(&grad_img, &geo, cfg);

        debug!("Compositing logo...");
        let res = composite_logo_from_path(dots, cfg.logo.as_deref(), &geo);

        debug!("Styled QR generated: {}x{} px", res.width(), res.height());
        Ok(res)
    }
}
