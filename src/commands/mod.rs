//! Keyword dispatch over the live polygon collection

pub mod error;
pub mod handlers;
pub mod reply;
pub mod session;

use std::collections::HashMap;

use crate::domain::{Polygon, Tokens};
use crate::geometry::Extremum;

pub use error::{ArgumentError, CommandError};
pub use handlers::{
    AreaCommand, CountCommand, ExtremumCommand, InFrameCommand, IntersectionsCommand,
    PermsCommand, RightShapesCommand, RmEchoCommand,
};
pub use reply::Reply;
pub use session::{RunStats, Session};

/// A command that only reads the collection
pub trait QueryCommand {
    fn execute(&self, polygons: &[Polygon], args: &mut Tokens<'_>) -> Result<Reply, CommandError>;
}

/// A command allowed to remove polygons from the collection
pub trait MutateCommand {
    fn execute(
        &self,
        polygons: &mut Vec<Polygon>,
        args: &mut Tokens<'_>,
    ) -> Result<Reply, CommandError>;
}

/// A registered handler together with the access it needs
pub enum Handler {
    Query(Box<dyn QueryCommand>),
    Mutate(Box<dyn MutateCommand>),
}

/// Case-sensitive keyword to handler table
pub struct CommandTable {
    handlers: HashMap<&'static str, Handler>,
}

impl CommandTable {
    /// A table with no commands registered
    pub fn empty() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// The full command set
    pub fn standard() -> Self {
        let mut table = Self::empty();
        table.register_query("AREA", AreaCommand);
        table.register_query("COUNT", CountCommand);
        table.register_query("MAX", ExtremumCommand::new(Extremum::Max));
        table.register_query("MIN", ExtremumCommand::new(Extremum::Min));
        table.register_query("PERMS", PermsCommand);
        table.register_query("INFRAME", InFrameCommand);
        table.register_query("RIGHTSHAPES", RightShapesCommand);
        table.register_query("INTERSECTIONS", IntersectionsCommand);
        table.register_mutate("RMECHO", RmEchoCommand);
        table
    }

    pub fn register_query(&mut self, keyword: &'static str, command: impl QueryCommand + 'static) {
        self.handlers
            .insert(keyword, Handler::Query(Box::new(command)));
    }

    pub fn register_mutate(
        &mut self,
        keyword: &'static str,
        command: impl MutateCommand + 'static,
    ) {
        self.handlers
            .insert(keyword, Handler::Mutate(Box::new(command)));
    }

    /// Route `keyword` to its handler
    ///
    /// Query handlers only ever see a shared borrow of the collection.
    pub fn dispatch(
        &self,
        polygons: &mut Vec<Polygon>,
        keyword: &str,
        args: &mut Tokens<'_>,
    ) -> Result<Reply, CommandError> {
        match self.handlers.get(keyword) {
            Some(Handler::Query(command)) => command.execute(polygons, args),
            Some(Handler::Mutate(command)) => command.execute(polygons, args),
            None => Err(CommandError::UnknownCommand(keyword.to_string())),
        }
    }
}

impl Default for CommandTable {
    fn default() -> Self {
        Self::standard()
    }
}
