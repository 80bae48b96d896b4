//! Closed per-entity component table.
//!
//! Every entity owns exactly one [`ComponentStorage`], which holds one [`Slot`]
//! per component kind. The set of kinds is fixed at compile time by the
//! `component_storage!` invocation below, so looking up a kind is a plain
//! field access resolved statically through the [`Component`] trait. There is
//! no type map and no dynamic dispatch.
//!
//! # Semantics
//!
//! - [`ComponentStorage::add`] overwrites the slot unconditionally and marks it present.
//! - [`ComponentStorage::get`] always returns the slot value. An absent kind reads as
//!   its `Default`, so callers check [`ComponentStorage::has`] first when the
//!   difference matters.
//! - [`ComponentStorage::remove`] resets the slot to its default and clears the flag.

use super::animation::Animation;
use super::boundingbox::BoundingBox;
use super::boundingconvex::BoundingConvex;
use super::gravity::Gravity;
use super::input::Input;
use super::jump::Jump;
use super::lifespan::LifeSpan;
use super::sound::Sound;
use super::state::State;
use super::transform::Transform;

/// A component value plus its existence flag.
#[derive(Debug, Clone, Default)]
pub struct Slot<T> {
    value: T,
    exists: bool,
}

/// Maps a component kind to its slot inside [`ComponentStorage`].
///
/// Implemented only by the `component_storage!` macro for the closed set of kinds.
pub trait Component: Default + Sized {
    fn slot(storage: &ComponentStorage) -> &Slot<Self>;
    fn slot_mut(storage: &mut ComponentStorage) -> &mut Slot<Self>;
}

macro_rules! component_storage {
    ($($field:ident: $kind:ty),* $(,)?) => {
        /// Fixed set of component slots owned by a single entity.
        #[derive(Debug, Clone, Default)]
        pub struct ComponentStorage {
            $($field: Slot<$kind>,)*
        }

        $(
            impl Component for $kind {
                #[inline]
                fn slot(storage: &ComponentStorage) -> &Slot<Self> {
                    &storage.$field
                }
                #[inline]
                fn slot_mut(storage: &mut ComponentStorage) -> &mut Slot<Self> {
                    &mut storage.$field
                }
            }
        )*

        impl ComponentStorage {
            /// Names of the component kinds currently present, in declaration order.
            pub fn present_kinds(&self) -> Vec<&'static str> {
                let mut kinds = Vec::new();
                $(
                    if self.$field.exists {
                        kinds.push(stringify!($field));
                    }
                )*
                kinds
            }
        }
    };
}

component_storage! {
    transform: Transform,
    lifespan: LifeSpan,
    input: Input,
    bounding_box: BoundingBox,
    animation: Animation,
    gravity: Gravity,
    state: State,
    jump: Jump,
    sound: Sound,
    bounding_convex: BoundingConvex,
}

impl ComponentStorage {
    /// Store `value` in its slot and mark it present. Returns the stored value.
    pub fn add<T: Component>(&mut self, value: T) -> &mut T {
        let slot = T::slot_mut(self);
        slot.value = value;
        slot.exists = true;
        &mut slot.value
    }

    #[inline]
    pub fn get<T: Component>(&self) -> &T {
        &T::slot(self).value
    }

    #[inline]
    pub fn get_mut<T: Component>(&mut self) -> &mut T {
        &mut T::slot_mut(self).value
    }

    #[inline]
    pub fn has<T: Component>(&self) -> bool {
        T::slot(self).exists
    }

    /// Reset the slot to its default value and clear the existence flag.
    pub fn remove<T: Component>(&mut self) {
        *T::slot_mut(self) = Slot::default();
    }
}
