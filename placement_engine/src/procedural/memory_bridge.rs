/// In-process ProceduralBridge keeping its objects in a Vec.
///
/// Stands in for a loaded procedural-object system in tests and headless
/// hosts. Deleted objects leave a free slot that the next clone reuses, so
/// public ids stay stable for the objects that remain.

use glam::{Quat, Vec3};
use crate::entity::EntityHandle;
use crate::error::{Error, Result};
use crate::world::WorldAccess;
use super::procedural_bridge::ProceduralBridge;
use super::procedural_object::ProceduralObject;

pub struct MemoryProceduralBridge {
    version: String,
    objects: Vec<Option<ProceduralObject>>,
}

impl MemoryProceduralBridge {
    pub fn new(version: impl Into<String>) -> Self {
        Self { version: version.into(), objects: Vec::new() }
    }

    /// Place a new object; returns its public id
    pub fn spawn(&mut self, base_prefab_name: impl Into<String>, position: Vec3, rotation: Quat) -> u32 {
        let index = self.next_unused_index();
        let object = ProceduralObject::from_index(index, base_prefab_name, position, rotation);
        let id = object.id;
        self.store(index, object);
        id
    }

    pub fn get(&self, id: u32) -> Option<&ProceduralObject> {
        let index = id.checked_sub(1)? as usize;
        self.objects.get(index)?.as_ref()
    }

    pub fn set_selected(&mut self, id: u32, selected: bool) -> Result<()> {
        let object = self.get_mut(id)?;
        object.selected = selected;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.objects.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get_mut(&mut self, id: u32) -> Result<&mut ProceduralObject> {
        id.checked_sub(1)
            .and_then(|index| self.objects.get_mut(index as usize))
            .and_then(Option::as_mut)
            .ok_or_else(|| Error::BridgeFailure(format!("No procedural object with id {}", id)))
    }

    fn next_unused_index(&self) -> u32 {
        self.objects.iter()
            .position(Option::is_none)
            .unwrap_or(self.objects.len()) as u32
    }

    fn store(&mut self, index: u32, object: ProceduralObject) {
        let index = index as usize;
        if index == self.objects.len() {
            self.objects.push(Some(object));
        } else {
            self.objects[index] = Some(object);
        }
    }
}

impl ProceduralBridge for MemoryProceduralBridge {
    fn version(&self) -> String {
        self.version.clone()
    }

    fn list_objects(&self, only_selected: bool) -> Vec<ProceduralObject> {
        self.objects.iter()
            .flatten()
            .filter(|object| !only_selected || object.selected)
            .cloned()
            .collect()
    }

    fn clone_object(&mut self, id: u32, position: Vec3) -> Result<u32> {
        let original = self.get_mut(id)?.clone();
        let index = self.next_unused_index();
        let copy = ProceduralObject::from_index(index, original.base_prefab_name, position, original.rotation);
        let new_id = copy.id;
        self.store(index, copy);
        Ok(new_id)
    }

    fn delete(&mut self, object: &ProceduralObject) -> Result<()> {
        self.get_mut(object.id)?;
        self.objects[object.index() as usize] = None;
        Ok(())
    }

    fn convert_instance(&mut self, handle: EntityHandle, world: &dyn WorldAccess) -> Result<ProceduralObject> {
        let (position, radians) = match handle {
            EntityHandle::Prop(prop) => (
                world.prop_position(prop),
                crate::config::angle_units_to_radians(world.prop_angle(prop)),
            ),
            EntityHandle::Building(building) => (
                world.building_position(building),
                world.building_angle(building),
            ),
            other => return Err(Error::UnsupportedKind(format!("{} cannot become a procedural object", other))),
        };

        let rotation = Quat::from_axis_angle(Vec3::NEG_Y, radians);
        let id = self.spawn(handle.to_string(), position, rotation);
        self.set_selected(id, true)?;
        self.get(id)
            .cloned()
            .ok_or_else(|| Error::BridgeFailure(format!("Converted object {} vanished", id)))
    }
}
