//! Symbol registry: one geometry generator per normalized SIDC.
//!
//! Generators are pure functions of their [`Context`]. The table is a
//! `static`, sorted by code and never modified at runtime.

mod fan;
mod point;
mod tasks;

use crate::error::{PreconditionError, Result};
use crate::feature::Feature;
use crate::geometry::Geometry;
use crate::math::{Point2, Segment};
use crate::operations::creation::PointBuffer;
use crate::style::{Style, StyleFactory};

/// Signature shared by every generator.
pub type GenerateFn = fn(&Context<'_>) -> Result<Vec<Style>>;

/// A registered symbol.
#[derive(Debug, Clone, Copy)]
pub struct SymbolSpec {
    /// Normalized 10-character SIDC.
    pub code: &'static str,
    /// Hierarchy name of the symbol.
    pub name: &'static str,
    pub generate: GenerateFn,
}

/// Inputs of a generator call.
pub struct Context<'a> {
    pub code: &'static str,
    pub feature: &'a Feature,
    pub resolution: f64,
    /// Anchor points in the working frame.
    pub points: &'a [Point2],
    pub styles: &'a StyleFactory<'a>,
}

impl Context<'_> {
    /// Returns the first `N` anchor points.
    ///
    /// # Errors
    ///
    /// Returns `PreconditionError::TooFewPoints` if fewer than `N` points
    /// were supplied.
    pub fn anchors<const N: usize>(&self) -> Result<[Point2; N]> {
        self.points
            .get(..N)
            .and_then(|s| <[Point2; N]>::try_from(s).ok())
            .ok_or_else(|| {
                PreconditionError::TooFewPoints {
                    code: self.code,
                    required: N,
                    actual: self.points.len(),
                }
                .into()
            })
    }

    /// Returns the segment between two anchors and its bearing.
    ///
    /// # Errors
    ///
    /// Returns `PreconditionError::CoincidentPoints` if the anchors coincide,
    /// or `TooFewPoints` if an index is out of range.
    pub fn leg(&self, from: usize, to: usize) -> Result<(Segment, f64)> {
        let point = |i: usize| {
            self.points.get(i).copied().ok_or(PreconditionError::TooFewPoints {
                code: self.code,
                required: i + 1,
                actual: self.points.len(),
            })
        };
        let segment = Segment::new(point(from)?, point(to)?);
        let bearing = segment.bearing().map_err(|_| PreconditionError::CoincidentPoints {
            code: self.code,
            first: from,
            second: to,
        })?;
        Ok((segment, bearing))
    }

    /// A filled disk around `center` at the configured buffer resolution.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` for a non-positive radius.
    pub fn buffer(&self, center: Point2, radius: f64) -> Result<Geometry> {
        PointBuffer::new(center, radius)
            .with_quadrant_segments(self.styles.config().buffer_quadrant_segments)
            .execute()
    }

    /// The label clearance hole around `anchor`, fixed in screen space.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` for a non-positive resolution.
    pub fn clearance(&self, anchor: Point2) -> Result<Geometry> {
        self.buffer(anchor, self.styles.config().clearance_px * self.resolution)
    }
}

/// Registered symbols, sorted by code.
static SYMBOLS: [SymbolSpec; 11] = [
    SymbolSpec {
        code: "G*G*GAS---",
        name: "TACGRP.C2GM.GNL.ARS.SRHARA",
        generate: fan::search_area,
    },
    SymbolSpec {
        code: "G*M*NM----",
        name: "TACGRP.MOBSU.CBRN.MSDZ",
        generate: point::minimum_safe_distance,
    },
    SymbolSpec {
        code: "G*M*OET---",
        name: "TACGRP.MOBSU.OBST.OBSEFT.TUR",
        generate: point::turn,
    },
    SymbolSpec {
        code: "G*T*E-----",
        name: "TACGRP.TSK.ISL",
        generate: tasks::isolate,
    },
    SymbolSpec {
        code: "G*T*O-----",
        name: "TACGRP.TSK.OCC",
        generate: tasks::occupy,
    },
    SymbolSpec {
        code: "G*T*Q-----",
        name: "TACGRP.TSK.RTN",
        generate: tasks::retain,
    },
    SymbolSpec {
        code: "G*T*S-----",
        name: "TACGRP.TSK.SCE",
        generate: tasks::secure,
    },
    SymbolSpec {
        code: "G*T*UC----",
        name: "TACGRP.TSK.SEC.COV",
        generate: fan::cover,
    },
    SymbolSpec {
        code: "G*T*UG----",
        name: "TACGRP.TSK.SEC.GUD",
        generate: fan::guard,
    },
    SymbolSpec {
        code: "G*T*US----",
        name: "TACGRP.TSK.SEC.SCN",
        generate: fan::screen,
    },
    SymbolSpec {
        code: "G*T*Z-----",
        name: "TACGRP.TSK.SZE",
        generate: point::seize,
    },
];

/// Looks up the generator for a normalized code.
#[must_use]
pub fn lookup(code: &str) -> Option<&'static SymbolSpec> {
    SYMBOLS
        .binary_search_by(|spec| spec.code.cmp(code))
        .ok()
        .map(|i| &SYMBOLS[i])
}

/// Returns every registered symbol.
#[must_use]
pub fn registered() -> &'static [SymbolSpec] {
    &SYMBOLS
}

#[cfg(test)]
pub(crate) mod testing {
    use crate::config::RenderConfig;
    use crate::error::Result;
    use crate::feature::Feature;
    use crate::frame::{Planar, Projection};
    use crate::math::Point2;
    use crate::sidc::standard_identity;
    use crate::style::{Mode, Palette, Style, StyleFactory};

    use super::{Context, GenerateFn};

    /// Runs a generator on working-frame points with an identity frame.
    pub fn run(generate: GenerateFn, feature: &Feature, resolution: f64) -> Result<Vec<Style>> {
        let adapter = Planar.adapt(Point2::origin());
        let config = RenderConfig::default();
        let palette = Palette::new(Mode::Default, standard_identity(feature.sidc()));
        let styles = StyleFactory::new(Mode::Default, palette, resolution, &adapter, &config);
        let ctx = Context {
            code: "G*X*TEST--",
            feature,
            resolution,
            points: feature.coordinates(),
            styles: &styles,
        };
        generate(&ctx)
    }

    pub fn count(styles: &[Style], pred: impl Fn(&Style) -> bool) -> usize {
        styles.iter().filter(|s| pred(s)).count()
    }
}
