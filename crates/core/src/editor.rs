//! Glue between the grid engine and an interactive host, e.g. a level editor.
//!
//! The host owns the scene. It tells the session which object is selected and
//! where things are, and the session tells it where the selected object should
//! be moved to and which cells to draw. The session itself only holds the grid
//! config, whether the overlay is shown, and which object the overlay is
//! anchored to.

use crate::{
    grid::{BoundaryCell, HexGrid},
    util::unit::WorldPosition,
    GridConfig,
};
use anyhow::bail;
use log::{debug, info};
use std::fmt::Debug;

/// The scene that a session operates on. Positions are always local to the
/// object's parent, so an anchor's children are in the anchor's frame.
pub trait SceneHost {
    /// Handle that identifies one object in the scene
    type Id: Copy + Debug + Eq;

    /// The currently selected object, if any
    fn selection(&self) -> Option<Self::Id>;

    /// Position of an object relative to its parent. `None` if the object no
    /// longer exists.
    fn local_position(&self, id: Self::Id) -> Option<WorldPosition>;

    /// Local positions of all of an object's children. `None` if the object no
    /// longer exists.
    fn child_positions(&self, id: Self::Id) -> Option<Vec<WorldPosition>>;

    /// Move an object, relative to its parent
    fn set_local_position(
        &mut self,
        id: Self::Id,
        position: WorldPosition,
    ) -> anyhow::Result<()>;
}

/// State of one alignment session. While active, every [tick](Self::tick)
/// snaps the selected object onto the grid and recomputes the overlay of empty
/// cells around the anchor's children.
///
/// A session can be active without an anchor, if nothing was selected when it
/// was switched on. It still snaps selections, but has no overlay to draw.
#[derive(Clone, Debug)]
pub struct EditorSession<Id> {
    grid: HexGrid,
    active: bool,
    /// The object whose children make up the occupied region. Only ever set
    /// while the session is active.
    anchor: Option<Id>,
}

impl<Id: Copy + Debug + Eq> EditorSession<Id> {
    /// Start a new, inactive session. Returns an error if the config is
    /// invalid.
    pub fn new(config: GridConfig) -> anyhow::Result<Self> {
        Ok(Self {
            grid: HexGrid::new(config)?,
            active: false,
            anchor: None,
        })
    }

    pub fn config(&self) -> &GridConfig {
        self.grid.config()
    }

    pub fn grid(&self) -> &HexGrid {
        &self.grid
    }

    /// Replace the grid config. The config is locked while the session is
    /// active, so this fails unless the session is deactivated first. Also
    /// fails if the new config is invalid, in which case the old one is kept.
    pub fn set_config(&mut self, config: GridConfig) -> anyhow::Result<()> {
        if self.active {
            bail!("cannot change grid config while active, deactivate first");
        }
        self.grid = HexGrid::new(config)?;
        Ok(())
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn anchor(&self) -> Option<Id> {
        self.anchor
    }

    /// Switch the session on, anchored to the given selection. With nothing
    /// selected, the session is still active but has no anchor.
    pub fn activate(&mut self, selection: Option<Id>) {
        self.active = true;
        self.anchor = selection;
        match selection {
            Some(anchor) => info!("Anchored grid to {:?}", anchor),
            None => info!("Nothing selected, grid not anchored"),
        }
    }

    /// Switch the session off and forget the anchor
    pub fn deactivate(&mut self) {
        self.active = false;
        if let Some(anchor) = self.anchor.take() {
            info!("Released grid anchor {:?}", anchor);
        }
    }

    /// Flip between active and inactive. When activating, the given selection
    /// becomes the anchor.
    pub fn toggle(&mut self, selection: Option<Id>) {
        if self.is_active() {
            self.deactivate();
        } else {
            self.activate(selection);
        }
    }

    /// Run one update against the host. Does nothing while inactive.
    /// Otherwise:
    ///
    /// 1. Compute the overlay from the anchor's children. If there is no
    ///    anchor, or it no longer exists, there is no overlay.
    /// 2. If something other than the anchor is selected, snap it onto the
    ///    grid. The host is only written to if the position actually changed.
    ///
    /// Returns the overlay cells, if there are any to draw.
    pub fn tick<H: SceneHost<Id = Id>>(
        &self,
        host: &mut H,
    ) -> anyhow::Result<Option<Vec<BoundaryCell>>> {
        if !self.active {
            return Ok(None);
        }

        let overlay = self
            .anchor
            .and_then(|anchor| host.child_positions(anchor))
            .map(|positions| self.grid.empty_boundary(positions));

        let selection = host.selection().filter(|id| Some(*id) != self.anchor);
        if let Some(selected) = selection {
            if let Some(position) = host.local_position(selected) {
                let snapped = self.grid.snap(position);
                if snapped != position {
                    debug!(
                        "Moving {:?} from {} to {}",
                        selected, position, snapped
                    );
                    host.set_local_position(selected, snapped)?;
                }
            }
        }

        Ok(overlay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::hex::{AxialPoint, Orientation};
    use std::collections::HashMap;

    /// Flat scene where object 0 is the anchor and everything else is one of
    /// its children
    #[derive(Debug, Default)]
    struct MockScene {
        selection: Option<u32>,
        positions: HashMap<u32, WorldPosition>,
        writes: Vec<(u32, WorldPosition)>,
    }

    impl MockScene {
        fn new(positions: &[(u32, WorldPosition)]) -> Self {
            Self {
                positions: positions.iter().copied().collect(),
                ..Default::default()
            }
        }
    }

    impl SceneHost for MockScene {
        type Id = u32;

        fn selection(&self) -> Option<u32> {
            self.selection
        }

        fn local_position(&self, id: u32) -> Option<WorldPosition> {
            self.positions.get(&id).copied()
        }

        fn child_positions(&self, id: u32) -> Option<Vec<WorldPosition>> {
            self.positions.get(&id)?;
            let mut children: Vec<_> = self
                .positions
                .iter()
                .filter(|(child_id, _)| **child_id != id)
                .collect();
            children.sort_by_key(|(child_id, _)| **child_id);
            Some(children.into_iter().map(|(_, pos)| *pos).collect())
        }

        fn set_local_position(
            &mut self,
            id: u32,
            position: WorldPosition,
        ) -> anyhow::Result<()> {
            match self.positions.get_mut(&id) {
                Some(pos) => {
                    *pos = position;
                    self.writes.push((id, position));
                    Ok(())
                }
                None => bail!("no object {}", id),
            }
        }
    }

    fn session() -> EditorSession<u32> {
        EditorSession::new(GridConfig::default()).unwrap()
    }

    #[test]
    fn test_toggle() {
        let mut session = session();
        assert!(!session.is_active());

        session.toggle(Some(3));
        assert!(session.is_active());
        assert_eq!(session.anchor(), Some(3));

        session.toggle(Some(4));
        assert!(!session.is_active());
        assert_eq!(session.anchor(), None);

        // Nothing selected still switches on, just without an anchor
        session.toggle(None);
        assert!(session.is_active());
        assert_eq!(session.anchor(), None);
        session.toggle(None);
        assert!(!session.is_active());
    }

    #[test]
    fn test_config_locked_while_active() {
        let mut session = session();
        let config = GridConfig {
            orientation: Orientation::PointyTop,
            ..Default::default()
        };

        session.activate(Some(0));
        assert!(session.set_config(config).is_err());
        assert_eq!(session.config(), &GridConfig::default());

        session.deactivate();
        session.set_config(config).unwrap();
        assert_eq!(session.config(), &config);

        // Invalid configs are rejected and the old one is kept
        assert!(session
            .set_config(GridConfig {
                radius: -1.0,
                ..Default::default()
            })
            .is_err());
        assert_eq!(session.config(), &config);
    }

    #[test]
    fn test_tick_inactive() {
        let mut scene = MockScene::new(&[(0, WorldPosition::ORIGIN)]);
        scene.positions.insert(1, WorldPosition::new(1.0, 0.0, 1.0));
        scene.selection = Some(1);
        assert_eq!(session().tick(&mut scene).unwrap(), None);
        assert!(scene.writes.is_empty());
    }

    #[test]
    fn test_tick_snaps_selection() {
        let mut session = session();
        let mut scene = MockScene::new(&[
            (0, WorldPosition::new(100.0, 0.0, 100.0)),
            (1, WorldPosition::ORIGIN),
            (2, WorldPosition::new(7.0, 3.0, 5.0)),
        ]);
        session.activate(Some(0));
        scene.selection = Some(2);

        let overlay = session.tick(&mut scene).unwrap().unwrap();
        assert!(!overlay.is_empty());
        let snapped = session.grid().axial_to_world(AxialPoint::new(1, 0));
        assert_eq!(scene.writes, vec![(2, snapped)]);

        // Already aligned, so the host isn't written again
        session.tick(&mut scene).unwrap();
        assert_eq!(scene.writes.len(), 1);
    }

    #[test]
    fn test_tick_never_moves_anchor() {
        let mut session = session();
        let off_grid = WorldPosition::new(1.3, 0.0, 2.1);
        let mut scene = MockScene::new(&[(0, off_grid)]);
        session.activate(Some(0));
        scene.selection = Some(0);

        // No children, so the overlay is just the origin cell
        let overlay = session.tick(&mut scene).unwrap().unwrap();
        assert_eq!(overlay.len(), 1);
        assert_eq!(overlay[0].point, AxialPoint::ORIGIN);
        assert!(scene.writes.is_empty());
        assert_eq!(scene.positions[&0], off_grid);
    }

    #[test]
    fn test_tick_active_without_anchor() {
        let mut session = session();
        let mut scene = MockScene::new(&[
            (1, WorldPosition::new(7.0, 3.0, 5.0)),
            (2, WorldPosition::new(-1.0, 0.0, 9.0)),
        ]);
        session.activate(None);
        assert!(session.set_config(GridConfig::default()).is_err());

        // No overlay, but whatever is selected gets snapped
        scene.selection = Some(1);
        assert_eq!(session.tick(&mut scene).unwrap(), None);
        scene.selection = Some(2);
        assert_eq!(session.tick(&mut scene).unwrap(), None);

        let grid = session.grid();
        assert_eq!(
            scene.writes,
            vec![
                (1, grid.snap(WorldPosition::new(7.0, 3.0, 5.0))),
                (2, grid.snap(WorldPosition::new(-1.0, 0.0, 9.0))),
            ]
        );
    }

    #[test]
    fn test_tick_anchor_vanished() {
        let mut session = session();
        let mut scene =
            MockScene::new(&[(1, WorldPosition::new(7.0, 0.0, 5.0))]);
        session.activate(Some(0));
        scene.selection = Some(1);

        // No overlay, but the selection still gets snapped
        assert_eq!(session.tick(&mut scene).unwrap(), None);
        assert_eq!(scene.writes.len(), 1);
    }
}
