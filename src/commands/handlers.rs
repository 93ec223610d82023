//! Concrete command handlers
//!
//! Each handler pulls its own arguments from the rest of the command line
//! and returns a [`Reply`]; nothing is written until the reply exists.

use crate::domain::{MIN_VERTICES, Parity, Polygon, Tokens};
use crate::geometry::{
    Extremum, Metric, VertexFilter, count_intersections, count_matching, count_permutations,
    count_right_shapes, doubled_area, doubled_area_sum, in_frame, mean_area, remove_echoes,
    select,
};

use super::{ArgumentError, CommandError, MutateCommand, QueryCommand, Reply};

fn next_argument<'a>(
    args: &mut Tokens<'a>,
    expected: &'static str,
) -> Result<&'a str, ArgumentError> {
    args.next().ok_or(ArgumentError::Missing { expected })
}

/// Parse a plain run of decimal digits; signs are not numbers here
fn unsigned(token: &str, expected: &'static str) -> Result<usize, ArgumentError> {
    let unexpected = || ArgumentError::Unexpected {
        token: token.to_string(),
        expected,
    };
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(unexpected());
    }
    token.parse().map_err(|_| unexpected())
}

/// Parse an explicit vertex count, rejecting counts no polygon can have
fn vertex_count(token: &str, expected: &'static str) -> Result<usize, ArgumentError> {
    let count = unsigned(token, expected)?;
    if count < MIN_VERTICES {
        return Err(ArgumentError::VertexCount(count));
    }
    Ok(count)
}

fn read_polygon(args: &mut Tokens<'_>) -> Result<Polygon, ArgumentError> {
    Ok(Polygon::read(args)?)
}

/// `AREA <EVEN|ODD|MEAN|count>`
#[derive(Debug, Default)]
pub struct AreaCommand;

impl QueryCommand for AreaCommand {
    fn execute(&self, polygons: &[Polygon], args: &mut Tokens<'_>) -> Result<Reply, CommandError> {
        const EXPECTED: &str = "EVEN, ODD, MEAN or a vertex count";
        let filter = match next_argument(args, EXPECTED)? {
            "EVEN" => VertexFilter::Parity(Parity::Even),
            "ODD" => VertexFilter::Parity(Parity::Odd),
            // MEAN always averages the whole collection
            "MEAN" => {
                let mean = mean_area(polygons).ok_or(ArgumentError::EmptyCollection)?;
                return Ok(Reply::Mean(mean));
            }
            token => VertexFilter::Exactly(vertex_count(token, EXPECTED)?),
        };
        Ok(Reply::area(doubled_area_sum(polygons, filter)))
    }
}

/// `COUNT <EVEN|ODD|count>`
#[derive(Debug, Default)]
pub struct CountCommand;

impl QueryCommand for CountCommand {
    fn execute(&self, polygons: &[Polygon], args: &mut Tokens<'_>) -> Result<Reply, CommandError> {
        const EXPECTED: &str = "EVEN, ODD or a vertex count";
        let filter = match next_argument(args, EXPECTED)? {
            "EVEN" => VertexFilter::Parity(Parity::Even),
            "ODD" => VertexFilter::Parity(Parity::Odd),
            token => VertexFilter::Exactly(unsigned(token, EXPECTED)?),
        };
        Ok(Reply::Count(count_matching(polygons, filter)))
    }
}

/// `MIN <AREA|VERTEXES>` and `MAX <AREA|VERTEXES>`
#[derive(Debug)]
pub struct ExtremumCommand {
    extremum: Extremum,
}

impl ExtremumCommand {
    pub fn new(extremum: Extremum) -> Self {
        Self { extremum }
    }
}

impl QueryCommand for ExtremumCommand {
    fn execute(&self, polygons: &[Polygon], args: &mut Tokens<'_>) -> Result<Reply, CommandError> {
        const EXPECTED: &str = "AREA or VERTEXES";
        let token = next_argument(args, EXPECTED)?;
        let metric = Metric::from_keyword(token).ok_or_else(|| ArgumentError::Unexpected {
            token: token.to_string(),
            expected: EXPECTED,
        })?;
        let chosen =
            select(polygons, metric, self.extremum).ok_or(ArgumentError::EmptyCollection)?;
        Ok(match metric {
            Metric::Area => Reply::area(doubled_area(chosen)),
            Metric::Vertexes => Reply::Count(chosen.vertex_count()),
        })
    }
}

/// `PERMS <polygon>`
#[derive(Debug, Default)]
pub struct PermsCommand;

impl QueryCommand for PermsCommand {
    fn execute(&self, polygons: &[Polygon], args: &mut Tokens<'_>) -> Result<Reply, CommandError> {
        let query = read_polygon(args)?;
        Ok(Reply::Count(count_permutations(polygons, &query)))
    }
}

/// `INFRAME <polygon>`
#[derive(Debug, Default)]
pub struct InFrameCommand;

impl QueryCommand for InFrameCommand {
    fn execute(&self, polygons: &[Polygon], args: &mut Tokens<'_>) -> Result<Reply, CommandError> {
        let query = read_polygon(args)?;
        let inside = in_frame(polygons, &query).ok_or(ArgumentError::EmptyCollection)?;
        Ok(Reply::Flag(inside))
    }
}

/// `RIGHTSHAPES`
#[derive(Debug, Default)]
pub struct RightShapesCommand;

impl QueryCommand for RightShapesCommand {
    fn execute(&self, polygons: &[Polygon], _args: &mut Tokens<'_>) -> Result<Reply, CommandError> {
        Ok(Reply::Count(count_right_shapes(polygons)))
    }
}

/// `INTERSECTIONS <polygon>`
#[derive(Debug, Default)]
pub struct IntersectionsCommand;

impl QueryCommand for IntersectionsCommand {
    fn execute(&self, polygons: &[Polygon], args: &mut Tokens<'_>) -> Result<Reply, CommandError> {
        let query = read_polygon(args)?;
        Ok(Reply::Count(count_intersections(polygons, &query)))
    }
}

/// `RMECHO [polygon]`
#[derive(Debug, Default)]
pub struct RmEchoCommand;

impl MutateCommand for RmEchoCommand {
    fn execute(
        &self,
        polygons: &mut Vec<Polygon>,
        args: &mut Tokens<'_>,
    ) -> Result<Reply, CommandError> {
        let target = if args.is_exhausted() {
            None
        } else {
            Some(read_polygon(args)?)
        };
        let removed = remove_echoes(polygons, target.as_ref());
        tracing::debug!(removed, remaining = polygons.len(), "echoes removed");
        Ok(Reply::Count(removed))
    }
}
