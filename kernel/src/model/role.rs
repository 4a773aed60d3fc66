use strum::{AsRefStr, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumString, Default)]
pub enum Role {
    Organizer,
    #[default]
    Attendee,
}
