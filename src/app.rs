// src/app.rs
use std::sync::Arc;

use iced::alignment::Horizontal;
use iced::widget::{button, column, container, row, scrollable, text, text_input, Column, Row, Space};
use iced::{executor, theme, Alignment, Application, Command, Element, Length, Theme};
use tracing::{error, info, warn};

use freefuse_hub::display::{
    BoardGroup, CalendarEntry, DashboardPanel, DashboardStats, DashboardSummary, GalleryCard, LINK_LABEL,
};
use freefuse_hub::loader::bootstrap;
use freefuse_hub::selection::layout;
use freefuse_hub::{
    render, DataLoader, Dataset, DisplayDescription, Field, FilterValue, ResourceKind, Section, SelectionState,
    ValueKind, ViewMode,
};

use crate::ui::{ContainerStyle, Styles, DARK_THEME, LIGHT_THEME};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const GALLERY_COLUMNS: usize = 3;

pub struct AppFlags {
    pub loader: DataLoader,
}

enum LoadState {
    Loading,
    Ready(Arc<Dataset>),
    Failed(String),
}

pub struct FreeFuseHub {
    loader: DataLoader,
    state: LoadState,
    selection: SelectionState,
    is_dark_mode: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    Loaded(Result<Arc<Dataset>, String>),
    Reload,
    SelectSection(Section),
    SelectView(ResourceKind, ViewMode),
    FilterChanged(ResourceKind, &'static str, String),
    ClearFilters(ResourceKind),
    ToggleTheme,
}

impl Application for FreeFuseHub {
    type Executor = executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = AppFlags;

    fn new(flags: AppFlags) -> (Self, Command<Message>) {
        let app = FreeFuseHub {
            loader: flags.loader,
            state: LoadState::Loading,
            selection: SelectionState::new(),
            is_dark_mode: true,
        };
        let command = app.load_command();
        (app, command)
    }

    fn title(&self) -> String {
        format!("FreeFuse Hub v{}", VERSION)
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::Loaded(Ok(dataset)) => {
                info!("FreeFuse Hub initialized successfully");
                self.state = LoadState::Ready(dataset);
            }

            Message::Loaded(Err(e)) => {
                error!("Error initializing app: {}", e);
                self.state = LoadState::Failed(e);
            }

            Message::Reload => {
                self.state = LoadState::Loading;
                return self.load_command();
            }

            Message::SelectSection(section) => {
                self.selection = self.selection.with_section(section);
            }

            Message::SelectView(kind, mode) => match self.selection.with_view(kind, mode) {
                Ok(next) => self.selection = next,
                Err(e) => warn!("{}", e),
            },

            Message::FilterChanged(kind, field, value) => {
                self.selection = self
                    .selection
                    .with_filter(kind, field, FilterValue::Contains(value));
            }

            Message::ClearFilters(kind) => {
                self.selection = self.selection.without_filters(kind);
            }

            Message::ToggleTheme => {
                self.is_dark_mode = !self.is_dark_mode;
            }
        }

        Command::none()
    }

    fn view(&self) -> Element<Message> {
        let styles = self.styles();

        let body: Element<Message> = match &self.state {
            // a failed start replaces the whole interface
            LoadState::Failed(detail) => return error_view(detail, styles),
            LoadState::Loading => centered_message("Loading data…", styles),
            LoadState::Ready(dataset) => {
                let description = render(dataset, &self.selection);
                column![
                    self.navigation(),
                    self.section_controls(dataset, styles),
                    scrollable(container(description_view(&description, styles)).padding(16).width(Length::Fill))
                        .height(Length::Fill),
                ]
                .spacing(8)
                .into()
            }
        };

        let footer = row![
            text(format!("FreeFuse Hub v{}", VERSION)).size(14).style(styles.footer_fg),
            Space::with_width(Length::Fill),
            button(text("⟳ Reload").size(16).horizontal_alignment(Horizontal::Center))
                .on_press(Message::Reload)
                .style(theme::Button::Primary),
            button(text("💡").size(18).horizontal_alignment(Horizontal::Center))
                .on_press(Message::ToggleTheme)
                .style(theme::Button::Primary),
        ]
        .spacing(10)
        .padding(10)
        .align_items(Alignment::Center)
        .width(Length::Fill);

        container(column![
            body,
            container(footer)
                .width(Length::Fill)
                .style(theme::Container::Custom(Box::new(ContainerStyle::flat(styles.footer_bg)))),
        ])
        .width(Length::Fill)
        .height(Length::Fill)
        .style(theme::Container::Custom(Box::new(ContainerStyle::flat(styles.bg))))
        .into()
    }

    fn theme(&self) -> Theme {
        if self.is_dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

impl FreeFuseHub {
    fn styles(&self) -> &'static Styles {
        if self.is_dark_mode {
            &DARK_THEME
        } else {
            &LIGHT_THEME
        }
    }

    fn load_command(&self) -> Command<Message> {
        let loader = self.loader.clone();
        Command::perform(
            async move {
                bootstrap(loader)
                    .await
                    .map(Arc::new)
                    .map_err(|e| e.to_string())
            },
            Message::Loaded,
        )
    }

    fn navigation(&self) -> Element<Message> {
        let current = self.selection.section();
        let tabs: Vec<Element<Message>> = Section::all()
            .map(|section| {
                button(text(section.title()).size(16))
                    .on_press(Message::SelectSection(section))
                    .padding(8)
                    .style(if section == current {
                        theme::Button::Primary
                    } else {
                        theme::Button::Secondary
                    })
                    .into()
            })
            .collect();

        Row::with_children(tabs).spacing(4).padding(8).into()
    }

    fn section_controls(&self, dataset: &Dataset, styles: &Styles) -> Element<Message> {
        let Section::Resource(kind) = self.selection.section() else {
            return Space::with_height(Length::Fixed(0.0)).into();
        };
        let section = layout(kind);
        let current_mode = self.selection.view(kind);

        let mut controls = Row::new()
            .spacing(6)
            .padding([0, 8])
            .align_items(Alignment::Center)
            .push(
                text(format!("{} ({})", kind.title(), dataset.records(kind).len()))
                    .size(20)
                    .style(styles.fg),
            )
            .push(Space::with_width(Length::Fixed(16.0)));

        for mode in section.modes() {
            controls = controls.push(
                button(text(mode.title()).size(14))
                    .on_press(Message::SelectView(kind, mode))
                    .style(if mode == current_mode {
                        theme::Button::Primary
                    } else {
                        theme::Button::Secondary
                    }),
            );
        }

        controls = controls.push(Space::with_width(Length::Fill));

        for &field in section.filter_fields {
            let current = self
                .selection
                .filter(kind, field)
                .map(FilterValue::as_str)
                .unwrap_or("");
            controls = controls.push(
                text_input(&format!("Filter by {}", field), current)
                    .on_input(move |value| Message::FilterChanged(kind, field, value))
                    .padding(6)
                    .width(Length::Fixed(170.0)),
            );
        }

        controls
            .push(
                button(text("Clear").size(14))
                    .on_press(Message::ClearFilters(kind))
                    .style(theme::Button::Secondary),
            )
            .into()
    }
}

fn centered_message<'a>(message: &str, styles: &Styles) -> Element<'a, Message> {
    container(
        text(message)
            .size(22)
            .style(styles.muted_fg)
            .horizontal_alignment(Horizontal::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .center_x()
    .center_y()
    .into()
}

fn error_view<'a>(detail: &str, styles: &Styles) -> Element<'a, Message> {
    container(
        column![
            text("⚠").size(48).style(styles.error_fg),
            text("Error").size(28).style(styles.error_fg),
            text("Failed to initialize the application").size(18).style(styles.error_fg),
            text(detail).size(14).style(styles.muted_fg),
        ]
        .spacing(12)
        .align_items(Alignment::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .center_x()
    .center_y()
    .style(theme::Container::Custom(Box::new(ContainerStyle::flat(styles.bg))))
    .into()
}

fn description_view<'a>(description: &DisplayDescription, styles: &Styles) -> Element<'a, Message> {
    match description {
        DisplayDescription::Empty { message } => container(
            column![
                text("📥").size(40).style(styles.muted_fg),
                text(message).size(18).style(styles.muted_fg),
            ]
            .spacing(8)
            .align_items(Alignment::Center),
        )
        .width(Length::Fill)
        .padding(40)
        .center_x()
        .into(),
        DisplayDescription::Table { columns, rows } => table_view(columns, rows, styles),
        DisplayDescription::Board { groups, .. } => board_view(groups, styles),
        DisplayDescription::Gallery { cards, .. } => gallery_view(cards, styles),
        DisplayDescription::Calendar { entries, .. } => calendar_view(entries, styles),
        DisplayDescription::Dashboard(summary) => dashboard_view(summary, styles),
    }
}

fn value_view<'a>(field: &Field, styles: &Styles) -> Element<'a, Message> {
    let shown = match field.kind {
        ValueKind::Link => format!("{} ↗ {}", LINK_LABEL, field.value),
        _ => field.display_text().to_string(),
    };
    text(shown).size(15).style(styles.value_color(&field.kind)).into()
}

fn labeled_view<'a>(field: &Field, styles: &Styles) -> Element<'a, Message> {
    row![
        text(format!("{}:", field.label)).size(15).style(styles.muted_fg),
        value_view(field, styles),
    ]
    .spacing(6)
    .into()
}

fn column_width(index: usize) -> Length {
    if index == 0 {
        Length::Fixed(220.0)
    } else {
        Length::Fixed(150.0)
    }
}

fn table_view<'a>(columns: &[String], rows: &[Vec<Field>], styles: &Styles) -> Element<'a, Message> {
    let headers: Row<'a, Message> = Row::with_children(
        columns
            .iter()
            .enumerate()
            .map(|(i, header)| {
                container(text(header).size(16).style(styles.header_fg))
                    .width(column_width(i))
                    .padding(6)
                    .style(theme::Container::Custom(Box::new(ContainerStyle::flat(styles.header_bg))))
                    .into()
            })
            .collect(),
    )
    .spacing(1);

    let mut children: Vec<Element<'a, Message>> = vec![headers.into()];
    for row in rows {
        let cells: Vec<Element<'a, Message>> = row
            .iter()
            .enumerate()
            .map(|(i, field)| container(value_view(field, styles)).width(column_width(i)).padding(6).into())
            .collect();
        children.push(Row::with_children(cells).spacing(1).into());
    }

    Column::with_children(children).spacing(1).into()
}

fn card<'a>(content: Column<'a, Message>, width: Length, styles: &Styles) -> Element<'a, Message> {
    container(content.spacing(4))
        .padding(12)
        .width(width)
        .style(theme::Container::Custom(Box::new(ContainerStyle::card(styles))))
        .into()
}

fn board_view<'a>(groups: &[BoardGroup], styles: &Styles) -> Element<'a, Message> {
    let mut columns: Vec<Element<'a, Message>> = Vec::with_capacity(groups.len());

    for group in groups {
        let mut lane = Column::new().spacing(8).width(Length::Fixed(280.0)).push(
            text(format!("{} ({})", group.key, group.cards.len()))
                .size(18)
                .style(styles.fg),
        );

        for board_card in &group.cards {
            let lines: Vec<Element<'a, Message>> = board_card
                .fields
                .iter()
                .map(|field| match field.kind {
                    ValueKind::Status { .. } | ValueKind::Priority { .. } => value_view(field, styles),
                    _ => labeled_view(field, styles),
                })
                .collect();
            lane = lane.push(card(Column::with_children(lines), Length::Fill, styles));
        }

        columns.push(lane.into());
    }

    Row::with_children(columns).spacing(16).into()
}

fn gallery_view<'a>(cards: &[GalleryCard], styles: &Styles) -> Element<'a, Message> {
    let rows: Vec<Element<'a, Message>> = cards
        .chunks(GALLERY_COLUMNS)
        .map(|chunk| {
            let items: Vec<Element<'a, Message>> = chunk
                .iter()
                .map(|gallery_card| {
                    let mut content = Column::new()
                        .push(text(&gallery_card.title).size(18).style(styles.fg))
                        .push(text(&gallery_card.group).size(13).style(styles.muted_fg));
                    for field in &gallery_card.fields {
                        content = content.push(labeled_view(field, styles));
                    }
                    card(content, Length::Fixed(300.0), styles)
                })
                .collect();
            Row::with_children(items).spacing(12).into()
        })
        .collect();

    Column::with_children(rows).spacing(12).into()
}

fn calendar_view<'a>(entries: &[CalendarEntry], styles: &Styles) -> Element<'a, Message> {
    let days: Vec<Element<'a, Message>> = entries
        .iter()
        .map(|entry| {
            let content = Column::new()
                .push(text(&entry.date).size(16).style(styles.fg))
                .push(text(&entry.event).size(15).style(styles.link_fg));
            card(content, Length::Fixed(200.0), styles)
        })
        .collect();

    // fixed-width cells wrapped into rows of seven
    let mut rows: Vec<Element<'a, Message>> = Vec::new();
    let mut days = days.into_iter().peekable();
    while days.peek().is_some() {
        let week: Vec<Element<'a, Message>> = days.by_ref().take(7).collect();
        rows.push(Row::with_children(week).spacing(8).into());
    }

    Column::with_children(rows).spacing(8).into()
}

fn panel_view<'a>(panel: &DashboardPanel, styles: &Styles) -> Element<'a, Message> {
    let mut content = Column::new().push(text(&panel.title).size(20).style(styles.fg));

    if panel.items.is_empty() {
        content = content.push(text(&panel.empty_message).size(15).style(styles.muted_fg));
    }

    for item in &panel.items {
        let mut heading = Row::new()
            .spacing(8)
            .push(text(&item.title).size(16).style(styles.fg));
        if let Some(badge) = &item.badge {
            heading = heading.push(value_view(badge, styles));
        }
        content = content
            .push(heading)
            .push(text(&item.detail).size(14).style(styles.muted_fg));
    }

    card(content, Length::FillPortion(1), styles)
}

fn stats_view<'a>(stats: &DashboardStats, styles: &Styles) -> Element<'a, Message> {
    let stat = |count: usize, label: &str| -> Element<'a, Message> {
        row![
            text(count).size(18).style(styles.fg),
            text(label).size(15).style(styles.muted_fg),
        ]
        .spacing(8)
        .into()
    };

    card(
        column![
            text("Quick Stats").size(20).style(styles.fg),
            stat(stats.total_announcements, "Announcements"),
            stat(stats.pending_tasks, "Pending Tasks"),
            stat(stats.total_interns, "Interns"),
            stat(stats.upcoming_meetings, "Upcoming Meetings"),
        ],
        Length::FillPortion(1),
        styles,
    )
}

fn dashboard_view<'a>(summary: &DashboardSummary, styles: &Styles) -> Element<'a, Message> {
    column![
        row![
            panel_view(&summary.recent_announcements, styles),
            panel_view(&summary.open_tasks, styles),
        ]
        .spacing(16),
        row![
            panel_view(&summary.upcoming_meetings, styles),
            stats_view(&summary.stats, styles),
        ]
        .spacing(16),
    ]
    .spacing(16)
    .into()
}
