use crate::convection::{
    FlowIndicator, Particle, all_flow_indicators, all_particles, plate_offset, subduction_shift,
};
use crate::backdrop::{LEGEND, LegendEntry, TEMPERATURE_SCALE, TITLE, TemperatureScale};
use crate::error::ExportError;
use crate::layout::{ConvectionLayout, DEFAULT_LAYOUT};
use crate::phase::Phase;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Everything time-dependent in one tick of the diagram.
///
/// A frame is rebuilt from scratch for every phase; it is never patched.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Frame {
    pub phase: Phase,
    pub flow_indicators: Vec<FlowIndicator>,
    pub particles: Vec<Particle>,
    pub plate_offset: i32,
    pub subduction_shift: u16,
}

impl Frame {
    pub fn generate(phase: Phase) -> Self {
        Self::generate_with(phase, &DEFAULT_LAYOUT)
    }

    pub fn generate_with(phase: Phase, layout: &ConvectionLayout) -> Self {
        Frame {
            phase,
            flow_indicators: all_flow_indicators(phase, layout),
            particles: all_particles(phase, layout),
            plate_offset: plate_offset(phase),
            subduction_shift: subduction_shift(phase),
        }
    }

    pub fn to_css(&self) -> CssFrame {
        CssFrame {
            phase: self.phase.degrees(),
            flow_indicators: self.flow_indicators.iter().map(CssFlowIndicator::from).collect(),
            particles: self.particles.iter().map(CssParticle::from).collect(),
            plate_offset: format!("{}px", self.plate_offset),
            subduction_shift: format!("{}px", self.subduction_shift),
        }
    }
}

// String-typed view handed to a CSS renderer.

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CssFlowIndicator {
    pub x: String,
    pub y: String,
    pub rotation: String,
    pub color: String,
}

impl From<&FlowIndicator> for CssFlowIndicator {
    fn from(arrow: &FlowIndicator) -> Self {
        CssFlowIndicator {
            x: format!("{:.2}%", arrow.position.x),
            y: format!("{:.2}%", arrow.position.y),
            rotation: format!("rotate({}deg)", arrow.rotation_deg),
            color: arrow.color.css_fixed(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CssParticle {
    pub x: String,
    pub y: String,
    pub color: String,
    pub size: u32,
}

impl From<&Particle> for CssParticle {
    fn from(particle: &Particle) -> Self {
        CssParticle {
            x: format!("{}%", particle.position.x),
            y: format!("{}%", particle.position.y),
            color: particle.color.to_string(),
            size: particle.size,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CssFrame {
    pub phase: u16,
    pub flow_indicators: Vec<CssFlowIndicator>,
    pub particles: Vec<CssParticle>,
    pub plate_offset: String,
    pub subduction_shift: String,
}

/// A frame plus the static decoration a renderer needs to label it.
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DiagramSnapshot {
    pub title: &'static str,
    pub frame: CssFrame,
    pub legend: &'static [LegendEntry],
    pub temperature_scale: TemperatureScale,
}

impl DiagramSnapshot {
    pub fn new(frame: &Frame) -> Self {
        DiagramSnapshot {
            title: TITLE,
            frame: frame.to_css(),
            legend: &LEGEND,
            temperature_scale: TEMPERATURE_SCALE,
        }
    }

    pub fn save_to_json<P: AsRef<Path>>(&self, path: P) -> Result<(), ExportError> {
        let file = File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        info!(
            phase = self.frame.phase,
            path = %path.as_ref().display(),
            "snapshot written"
        );
        Ok(())
    }
}
