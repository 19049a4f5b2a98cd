#![allow(dead_code)]

use std::collections::{BTreeMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{TimeZone, Utc};

use initiative_wizard::draft::{DEFAULT_DRAFT_KEY, DraftStore, MemoryStorage};
use initiative_wizard::submission::profile::ProfileFuture;
use initiative_wizard::submission::remote::RemoteFuture;
use initiative_wizard::submission::{
    InitiativeApi, InitiativeRecord, NoticeLevel, Notifier, ProfileService, RemoteError,
    SubmissionOrchestrator, SubmissionTiming, UserProfile,
};
use initiative_wizard::wizard::{
    ExternalTool, FormPatch, FormSnapshot, InitiativeUpdate, Objective, ProfileRole,
    RoadmapPhase, SeekingProfile, SocialNetwork,
};

pub const DUPLICATE_MARKER: &str = "An initiative with this title already exists";

/// Backend double answering from a queue; successes default to id 1.
#[derive(Default)]
pub struct ScriptedApi {
    responses: Mutex<VecDeque<Result<InitiativeRecord, RemoteError>>>,
    calls: Mutex<Vec<String>>,
    invalidations: Mutex<usize>,
}

impl ScriptedApi {
    pub fn push(&self, response: Result<InitiativeRecord, RemoteError>) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn invalidations(&self) -> usize {
        *self.invalidations.lock().unwrap()
    }

    fn answer(&self, call: String) -> RemoteFuture<'_, InitiativeRecord> {
        self.calls.lock().unwrap().push(call);
        let next = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(record(1, false)));
        Box::pin(async move { next })
    }
}

impl InitiativeApi for ScriptedApi {
    fn create<'a>(&'a self, form: &'a FormSnapshot) -> RemoteFuture<'a, InitiativeRecord> {
        self.answer(format!("create:{}", form.title))
    }

    fn update<'a>(&'a self, id: i64, form: &'a FormSnapshot) -> RemoteFuture<'a, InitiativeRecord> {
        self.answer(format!("update:{id}:{}", form.title))
    }

    fn promote_draft<'a>(
        &'a self,
        draft_id: i64,
        form: &'a FormSnapshot,
    ) -> RemoteFuture<'a, InitiativeRecord> {
        self.answer(format!("promote:{draft_id}:{}", form.title))
    }

    fn save_draft<'a>(
        &'a self,
        draft_id: Option<i64>,
        _form: &'a FormSnapshot,
    ) -> RemoteFuture<'a, InitiativeRecord> {
        self.answer(format!("save_draft:{draft_id:?}"))
    }

    fn delete<'a>(&'a self, id: i64) -> RemoteFuture<'a, ()> {
        self.calls.lock().unwrap().push(format!("delete:{id}"));
        Box::pin(async { Ok(()) })
    }

    fn invalidate_listings(&self) {
        *self.invalidations.lock().unwrap() += 1;
    }
}

/// Profile double; `link_github` mutates the held profile.
pub struct StubProfiles(Mutex<UserProfile>);

impl StubProfiles {
    pub fn new(profile: UserProfile) -> Self {
        Self(Mutex::new(profile))
    }
}

impl ProfileService for StubProfiles {
    fn current_profile(&self) -> ProfileFuture<'_, UserProfile> {
        let profile = self.0.lock().unwrap().clone();
        Box::pin(async move { Ok(profile) })
    }

    fn link_github<'a>(&'a self, url: &'a str) -> ProfileFuture<'a, UserProfile> {
        let profile = {
            let mut profile = self.0.lock().unwrap();
            profile
                .social_links
                .insert(SocialNetwork::Github, url.to_string());
            profile.clone()
        };
        Box::pin(async move { Ok(profile) })
    }
}

#[derive(Default)]
pub struct CollectingNotifier(Mutex<Vec<(NoticeLevel, String)>>);

impl CollectingNotifier {
    pub fn levels(&self) -> Vec<NoticeLevel> {
        self.0.lock().unwrap().iter().map(|(level, _)| *level).collect()
    }

    pub fn messages(&self) -> Vec<String> {
        self.0.lock().unwrap().iter().map(|(_, m)| m.clone()).collect()
    }
}

impl Notifier for CollectingNotifier {
    fn notify(&self, level: NoticeLevel, message: &str) {
        self.0.lock().unwrap().push((level, message.to_string()));
    }
}

pub struct Harness {
    pub api: Arc<ScriptedApi>,
    pub notices: Arc<CollectingNotifier>,
    pub orchestrator: SubmissionOrchestrator,
}

pub fn harness(profile: UserProfile, timing: SubmissionTiming) -> Harness {
    let api = Arc::new(ScriptedApi::default());
    let notices = Arc::new(CollectingNotifier::default());
    let orchestrator = SubmissionOrchestrator::new(
        api.clone(),
        Arc::new(StubProfiles::new(profile)),
        notices.clone(),
        timing,
    );
    Harness {
        api,
        notices,
        orchestrator,
    }
}

pub fn instant_timing() -> SubmissionTiming {
    SubmissionTiming {
        navigation_delay: Duration::ZERO,
        success_redirect: Duration::ZERO,
    }
}

pub fn record(id: i64, is_draft: bool) -> InitiativeRecord {
    InitiativeRecord {
        id,
        is_draft,
        form: FormSnapshot::default(),
    }
}

pub fn memory_store() -> DraftStore {
    DraftStore::open_create(Arc::new(MemoryStorage::new()), DEFAULT_DRAFT_KEY)
}

pub fn complete_profile() -> UserProfile {
    UserProfile {
        biography: "Community organiser".into(),
        avatar_url: "https://cdn.example.com/avatar.png".into(),
        roles: vec!["Founder".into()],
        skills: vec!["Fundraising".into()],
        social_links: BTreeMap::from([(
            SocialNetwork::Github,
            "https://github.com/organiser".into(),
        )]),
    }
}

pub fn general_patch() -> FormPatch {
    FormPatch {
        title: Some("Neighbourhood tool library".into()),
        motto: Some("Borrow, don't buy".into()),
        main_visual: Some("https://cdn.example.com/library.png".into()),
        ..FormPatch::default()
    }
}

pub fn vision_patch() -> FormPatch {
    FormPatch {
        description: Some("A lending library for tools".into()),
        problem: Some("Most drills are used thirteen minutes in their life".into()),
        solution: Some("Share them between neighbours".into()),
        objectives: Some(vec![Objective {
            description: "Lend 500 tools in the first year".into(),
        }]),
        ..FormPatch::default()
    }
}

pub fn team_patch() -> FormPatch {
    FormPatch {
        seeking_profiles: Some(vec![SeekingProfile {
            roles: vec![ProfileRole::Collaborator],
            skills: vec!["Logistics".into()],
            technical_skills: vec!["Inventory software".into()],
        }]),
        ..FormPatch::default()
    }
}

/// Values for every field of the three core steps.
pub fn core_form() -> FormSnapshot {
    let mut form = FormSnapshot::default();
    general_patch().apply(&mut form);
    vision_patch().apply(&mut form);
    team_patch().apply(&mut form);
    form
}

pub fn all_social_networks() -> BTreeMap<SocialNetwork, String> {
    SocialNetwork::ALL
        .into_iter()
        .map(|network| {
            let host = network.allowed_hosts()[0];
            (network, format!("https://{host}/tool-library"))
        })
        .collect()
}

pub fn one_external_link() -> BTreeMap<ExternalTool, String> {
    BTreeMap::from([(ExternalTool::Website, "https://tools.example.org".into())])
}

pub fn dated_update() -> InitiativeUpdate {
    InitiativeUpdate {
        title: "First loan".into(),
        content: "The first drill went out today".into(),
        created_at: Utc.with_ymd_and_hms(2024, 3, 9, 14, 30, 5).unwrap(),
    }
}

pub fn roadmap_phase() -> RoadmapPhase {
    RoadmapPhase {
        title: "Pilot".into(),
        description: "One street, fifty tools".into(),
    }
}
