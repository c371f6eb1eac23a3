//! # View and session state
//!
//! Everything the screens render lives in one [`AppState`]. The state is
//! plain data: no I/O, no framework types. The [`crate::app::App`]
//! controller mutates it through a [`StateHandle`] and the Dioxus views read
//! it through the same handle (a `Signal<AppState>` in the browser).
//!
//! ## Screens
//!
//! Exactly one [`Screen`] is visible at a time. [`AppState::navigate`]
//! replaces the current screen, hides the main message area and bumps a
//! generation counter. Async work captures a [`Ticket`] before awaiting and
//! applies its result only while [`AppState::is_current`] still holds, so a
//! late response never repaints a screen the user has already left.
//!
//! ## Returning from "add person"
//!
//! The relationship and event editors can jump to the person editor to
//! create someone who is not in the selector yet. The jump records a
//! [`PersonSlot`]; once the person is saved the controller goes back to the
//! originating editor and selects the new id in that slot.

mod forms;
mod handle;
mod lists;
mod messages;

pub use forms::{
    date_input_value, EditMode, EventForm, LoginForm, PersonForm, ProfileForm, RegisterForm,
    RelationshipForm,
};
pub use handle::StateHandle;
pub use lists::{ListState, PersonOption};
pub use messages::{Flash, MessageArea, MessageKind, Messages};

use api::{Person, PersonId, RelationType, UserInfo};

/// The mutually exclusive screens of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Auth,
    Home,
    Profile,
    PersonForm,
    PersonView,
    PeopleList,
    RelationshipsForm,
    RelationshipsList,
    EventsForm,
    EventsList,
}

impl Screen {
    /// The message area shown on this screen.
    pub fn message_area(self) -> MessageArea {
        match self {
            Screen::Auth => MessageArea::Auth,
            Screen::Profile => MessageArea::Profile,
            Screen::RelationshipsForm | Screen::RelationshipsList => MessageArea::Relationships,
            Screen::EventsForm | Screen::EventsList => MessageArea::Events,
            Screen::Home | Screen::PersonForm | Screen::PersonView | Screen::PeopleList => {
                MessageArea::Main
            }
        }
    }
}

/// Which tab of the auth screen is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthTab {
    #[default]
    Login,
    Register,
}

/// The authenticated session, if any.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<UserInfo>,
}

impl Session {
    pub fn is_active(&self) -> bool {
        self.token.is_some()
    }

    pub fn display_name(&self) -> &str {
        self.user.as_ref().map(UserInfo::display_name).unwrap_or("")
    }
}

/// Proof that a response belongs to the screen that requested it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
    screen: Screen,
}

impl Ticket {
    pub fn screen(&self) -> Screen {
        self.screen
    }
}

/// A person selector that can spawn the person editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonSlot {
    RelationshipFirst,
    RelationshipSecond,
    EventPerson,
}

impl PersonSlot {
    /// The editor to go back to.
    pub fn origin(self) -> Screen {
        match self {
            PersonSlot::RelationshipFirst | PersonSlot::RelationshipSecond => {
                Screen::RelationshipsForm
            }
            PersonSlot::EventPerson => Screen::EventsForm,
        }
    }

    pub fn selected(self, state: &AppState) -> Option<PersonId> {
        match self {
            PersonSlot::RelationshipFirst => state.relationship.person1,
            PersonSlot::RelationshipSecond => state.relationship.person2,
            PersonSlot::EventPerson => state.event.person,
        }
    }

    pub fn select(self, state: &mut AppState, id: Option<PersonId>) {
        match self {
            PersonSlot::RelationshipFirst => state.relationship.person1 = id,
            PersonSlot::RelationshipSecond => state.relationship.person2 = id,
            PersonSlot::EventPerson => state.event.person = id,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub screen: Screen,
    /// True until the persisted session has been checked.
    pub restoring: bool,
    pub auth_tab: AuthTab,
    pub session: Session,
    /// Result of the last health check; `None` before the first one.
    pub online: Option<bool>,

    pub login: LoginForm,
    pub register: RegisterForm,
    pub profile: ProfileForm,
    pub person: PersonForm,
    pub relationship: RelationshipForm,
    pub event: EventForm,

    pub viewed_person: Option<Person>,
    pub people: ListState<Person>,
    pub relationships: ListState<api::Relationship>,
    pub events: ListState<api::Event>,
    pub person_options: Vec<PersonOption>,
    pub relation_types: Vec<RelationType>,
    pub person_return: Option<PersonSlot>,

    pub messages: Messages,
    generation: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            screen: Screen::Auth,
            restoring: true,
            auth_tab: AuthTab::default(),
            session: Session::default(),
            online: None,
            login: LoginForm::default(),
            register: RegisterForm::default(),
            profile: ProfileForm::default(),
            person: PersonForm::default(),
            relationship: RelationshipForm::default(),
            event: EventForm::default(),
            viewed_person: None,
            people: ListState::default(),
            relationships: ListState::default(),
            events: ListState::default(),
            person_options: Vec::new(),
            relation_types: RelationType::ALL.to_vec(),
            person_return: None,
            messages: Messages::default(),
            generation: 0,
        }
    }
}

impl AppState {
    pub fn ticket(&self) -> Ticket {
        Ticket {
            generation: self.generation,
            screen: self.screen,
        }
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.generation == ticket.generation && self.screen == ticket.screen
    }

    /// Show `screen` and nothing else.
    pub fn navigate(&mut self, screen: Screen) -> Ticket {
        tracing::debug!(?screen, "navigate");
        self.screen = screen;
        self.generation += 1;
        self.messages.clear(MessageArea::Main);
        if screen != Screen::PersonForm {
            self.person_return = None;
        }
        self.ticket()
    }

    /// Open the profile screen, or close it when it is already open.
    pub fn toggle_profile(&mut self) -> Ticket {
        if self.screen == Screen::Profile {
            return self.navigate(Screen::Home);
        }
        self.profile.populate(self.session.user.as_ref());
        self.navigate(Screen::Profile)
    }

    pub fn show_auth_tab(&mut self, tab: AuthTab) {
        self.auth_tab = tab;
        self.messages.clear(MessageArea::Auth);
    }

    pub fn begin_session(&mut self, token: String, user: UserInfo) {
        self.session = Session {
            token: Some(token),
            user: Some(user),
        };
        self.login.reset();
        self.register.reset();
        self.restoring = false;
    }

    /// Forget the session and everything loaded under it.
    pub fn end_session(&mut self) {
        self.session = Session::default();
        self.restoring = false;
        self.auth_tab = AuthTab::Login;
        self.login.reset();
        self.register.reset();
        self.profile.reset();
        self.person.reset();
        self.relationship.reset();
        self.event.reset();
        self.viewed_person = None;
        self.people = ListState::default();
        self.relationships = ListState::default();
        self.events = ListState::default();
        self.person_options.clear();
        self.navigate(Screen::Auth);
    }

    pub fn person_name(&self, id: PersonId) -> Option<&str> {
        self.person_options
            .iter()
            .find(|o| o.id == id)
            .map(|o| o.label.as_str())
    }
}
