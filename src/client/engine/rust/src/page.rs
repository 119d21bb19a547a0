/* src/client/engine/rust/src/page.rs */

use folio_dom::{Document, Mutation, NodeId};
use tracing::debug;

use crate::config::PageConfig;
use crate::env::Environment;
use crate::error::EngineError;
use crate::events::{Action, DomEvent, EventRouter, Hit};
use crate::i18n::{
  DictionaryStore, Locale, LocaleSession, ResolveContext, ScanReport, Scanner, kicker_phrases,
  resolve_initial_locale,
};
use crate::scheduler::{Scheduler, Task};
use crate::storage::{MemoryStorage, Storage};
use crate::widgets::{
  CertTabs, Dismissible, Kicker, LangSelector, Lightbox, MobileNav, Typewriter, WidgetKind,
  ZoomModal, dismiss_first, escape, year,
};

/// A booted page: the document, every widget found in it, and the clock
/// that drives the animated ones.
pub struct Page<S: Storage = MemoryStorage> {
  doc: Document,
  config: PageConfig,
  env: Environment,
  session: LocaleSession<S>,
  scheduler: Scheduler,
  router: EventRouter,
  nav: Option<MobileNav>,
  lightbox: Option<Lightbox>,
  modal: Option<ZoomModal>,
  tabs: Option<CertTabs>,
  lang: LangSelector,
  kicker: Option<Kicker>,
  typewriter: Option<Typewriter>,
}

impl<S: Storage> Page<S> {
  /// Boot with the bundled dictionaries.
  pub fn boot(html: &str, env: Environment, storage: S, config: PageConfig) -> Result<Self, EngineError> {
    Self::boot_with_dictionaries(html, env, storage, config, DictionaryStore::builtin()?)
  }

  /// Parse `html` and initialize, in order: footer year, mobile nav,
  /// lightbox, zoom modal, certificate tabs, language selector (which
  /// applies the initial locale), kicker, typewriter, escape router.
  pub fn boot_with_dictionaries(
    html: &str,
    env: Environment,
    storage: S,
    config: PageConfig,
    store: DictionaryStore,
  ) -> Result<Self, EngineError> {
    config.validate()?;
    let mut doc = Document::parse(html);

    let stored = storage.get(&config.i18n.storage_key);
    let initial = resolve_initial_locale(&ResolveContext {
      stored: stored.as_deref(),
      language_hint: env.language_hint.as_deref(),
      default_locale: config.i18n.default_locale,
    });
    let session = LocaleSession::new(store, storage, config.i18n.storage_key.clone(), initial);

    year::init(&mut doc, config.site.start_year, env.current_year);

    let mut router = EventRouter::new();
    let nav = MobileNav::init(&doc);
    if let Some(nav) = &nav {
      nav.listeners()?.into_iter().for_each(|l| router.register(l));
    }
    let lightbox = Lightbox::init(&doc);
    if let Some(lightbox) = &lightbox {
      lightbox.listeners()?.into_iter().for_each(|l| router.register(l));
    }
    let modal = ZoomModal::init(&doc)?;
    if let Some(modal) = &modal {
      modal.listeners().into_iter().for_each(|l| router.register(l));
    }
    let tabs = CertTabs::init(&mut doc, session.dictionary())?;
    if let Some(tabs) = &tabs {
      tabs.listeners().into_iter().for_each(|l| router.register(l));
    }
    let lang = LangSelector::init()?;
    lang.listeners().into_iter().for_each(|l| router.register(l));
    let kicker = Kicker::init(&doc, &config.kicker)?;
    let typewriter = Typewriter::init(&doc, config.typewriter.step_ms)?;

    let mut page = Self {
      doc,
      config,
      env,
      session,
      scheduler: Scheduler::new(),
      router,
      nav,
      lightbox,
      modal,
      tabs,
      lang,
      kicker,
      typewriter,
    };
    page.apply_locale(initial);
    page.init_kicker();
    page.init_typewriter();
    page.router.register(escape::listener());

    debug!(
      locale = initial.code(),
      listeners = page.router.listeners().len(),
      reduced_motion = page.env.reduced_motion,
      "page booted"
    );
    Ok(page)
  }

  // -- locale --

  /// Make `locale` active: persist it, rewrite every marked node (a heading
  /// still typing continues with the new text), reload the kicker phrases
  /// and restart the rotation, then update the selector chrome and the
  /// certificate toggle labels.
  pub fn apply_locale(&mut self, locale: Locale) -> ScanReport {
    LangSelector::set_html_lang(&mut self.doc, locale);
    self.session.select(locale);
    let report = Scanner::apply(&mut self.doc, self.session.dictionary());
    if let Some(tw) = &mut self.typewriter {
      tw.retarget(&mut self.doc);
    }
    if let Some(kicker) = &mut self.kicker {
      kicker.set_phrases(kicker_phrases(&self.doc, kicker.word()));
      kicker.start(&mut self.doc, &mut self.scheduler, self.env.reduced_motion);
    }
    self.lang.apply_chrome(&mut self.doc, locale, &self.config.cv);
    if let Some(tabs) = &self.tabs {
      tabs.refresh_labels(&mut self.doc, self.session.dictionary());
    }
    report
  }

  /// Apply a raw code; unknown codes select the configured default.
  pub fn apply_locale_code(&mut self, code: &str) -> ScanReport {
    let locale = Locale::parse(code).unwrap_or_else(|| {
      debug!(code, "unknown locale code, using default");
      self.config.i18n.default_locale
    });
    self.apply_locale(locale)
  }

  pub fn active_locale(&self) -> Locale {
    self.session.active()
  }

  pub fn session(&self) -> &LocaleSession<S> {
    &self.session
  }

  // -- animation --

  /// (Re)start the kicker with its current phrase list.
  pub fn init_kicker(&mut self) {
    if let Some(kicker) = &mut self.kicker {
      kicker.start(&mut self.doc, &mut self.scheduler, self.env.reduced_motion);
    }
  }

  /// Start the heading animation. Only the first successful call types.
  pub fn init_typewriter(&mut self) -> bool {
    match &mut self.typewriter {
      Some(tw) => tw.start(&mut self.doc, &mut self.scheduler, self.env.reduced_motion),
      None => false,
    }
  }

  /// Move the clock forward by `ms`, running every timer that comes due.
  pub fn advance_time(&mut self, ms: u64) {
    let until = self.scheduler.now().saturating_add(ms);
    while let Some((_, task)) = self.scheduler.pop_due(until) {
      self.run_task(task);
    }
    self.scheduler.advance_to(until);
  }

  fn run_task(&mut self, task: Task) {
    match task {
      Task::KickerFadeOut => {
        if let Some(kicker) = &mut self.kicker {
          kicker.on_fade_out(&mut self.doc, &mut self.scheduler);
        }
      }
      Task::KickerAdvance => {
        if let Some(kicker) = &mut self.kicker {
          kicker.on_advance(&mut self.doc);
        }
      }
      Task::TypewriterStep => {
        if let Some(tw) = &mut self.typewriter {
          tw.on_step(&mut self.doc, &mut self.scheduler);
        }
      }
    }
  }

  // -- events --

  /// Route `event` and perform every hit in order.
  pub fn dispatch(&mut self, event: &DomEvent) -> Vec<Hit> {
    let hits = self.router.dispatch(&self.doc, event);
    for hit in &hits {
      self.perform(hit);
    }
    hits
  }

  pub fn click(&mut self, target: NodeId) -> Vec<Hit> {
    self.dispatch(&DomEvent::click(target))
  }

  pub fn touch(&mut self, target: NodeId) -> Vec<Hit> {
    self.dispatch(&DomEvent::touch(target))
  }

  pub fn key_down(&mut self, key: &str) -> Vec<Hit> {
    self.dispatch(&DomEvent::key_down(key))
  }

  fn perform(&mut self, hit: &Hit) {
    let doc = &mut self.doc;
    match (hit.action, hit.node) {
      (Action::NavToggle, _) => {
        if let Some(nav) = &self.nav {
          nav.toggle(doc);
        }
      }
      (Action::NavClose, _) => {
        if let Some(nav) = &self.nav {
          nav.close(doc);
        }
      }
      (Action::LightboxOpen, Some(trigger)) => {
        if let Some(lightbox) = &self.lightbox {
          lightbox.open_from(doc, trigger);
        }
      }
      (Action::LightboxClose, _) => {
        if let Some(lightbox) = &self.lightbox {
          lightbox.close(doc);
        }
      }
      (Action::ModalOpen, Some(trigger)) => {
        if let Some(modal) = &self.modal {
          modal.open_from(doc, trigger);
        }
      }
      (Action::ModalClose, _) => {
        if let Some(modal) = &self.modal {
          modal.close(doc);
        }
      }
      (Action::TabSelect, Some(tab)) => {
        if let Some(tabs) = &self.tabs {
          tabs.select(doc, tab, self.session.dictionary());
        }
      }
      (Action::GalleryToggle, Some(button)) => {
        if let Some(tabs) = &self.tabs {
          tabs.toggle_gallery(doc, button, self.session.dictionary());
        }
      }
      (Action::LangToggle, Some(button)) => {
        self.lang.toggle(doc, button);
      }
      (Action::LangSelect, Some(item)) => {
        let code = LangSelector::requested_code(doc, item).unwrap_or_default().to_string();
        self.apply_locale_code(&code);
        self.lang.close_all(&mut self.doc);
      }
      (Action::LangDismiss, _) => self.lang.close_all(doc),
      (Action::Escape, _) => {
        self.escape();
      }
      (action, None) => debug!(?action, "hit without a node"),
    }
  }

  /// Close the lightbox, else the zoom modal, else the mobile nav.
  pub fn escape(&mut self) -> Option<WidgetKind> {
    let mut order: Vec<&dyn Dismissible> = Vec::with_capacity(3);
    if let Some(lightbox) = &self.lightbox {
      order.push(lightbox);
    }
    if let Some(modal) = &self.modal {
      order.push(modal);
    }
    if let Some(nav) = &self.nav {
      order.push(nav);
    }
    dismiss_first(&mut self.doc, &order)
  }

  // -- queries --

  pub fn nav_open(&self) -> bool {
    self.nav.as_ref().is_some_and(|n| n.is_open(&self.doc))
  }

  pub fn lightbox_open(&self) -> bool {
    self.lightbox.as_ref().is_some_and(|l| l.is_open(&self.doc))
  }

  pub fn modal_open(&self) -> bool {
    self.modal.as_ref().is_some_and(|m| m.is_open(&self.doc))
  }

  pub fn lang_menu_open(&self) -> bool {
    self.lang.is_open(&self.doc)
  }

  pub fn document(&self) -> &Document {
    &self.doc
  }

  pub fn take_mutations(&mut self) -> Vec<Mutation> {
    self.doc.take_mutations()
  }

  pub fn config(&self) -> &PageConfig {
    &self.config
  }

  pub fn scheduler(&self) -> &Scheduler {
    &self.scheduler
  }

  pub fn router(&self) -> &EventRouter {
    &self.router
  }

  pub fn kicker(&self) -> Option<&Kicker> {
    self.kicker.as_ref()
  }

  pub fn typewriter(&self) -> Option<&Typewriter> {
    self.typewriter.as_ref()
  }

  pub fn storage(&self) -> &S {
    self.session.storage()
  }

  pub fn into_storage(self) -> S {
    self.session.into_storage()
  }
}
