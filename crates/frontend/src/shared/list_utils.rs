/// Утилиты для списков: отложенный поиск и сортировка через параметры запроса
use crate::shared::debounce::{BrowserRuntime, Debouncer, TimerRuntime};
use contracts::domain::a001_part_type::aggregate::PartTypeQuery;
use contracts::domain::a002_part::aggregate::PartQuery;
use contracts::domain::a003_client::aggregate::ClientQuery;
use contracts::domain::a004_rental::aggregate::RentalQuery;
use contracts::domain::a006_stock_movement::aggregate::MovementQuery;
use contracts::domain::common::normalize_search;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Задержка поиска после последнего нажатия клавиши
pub const SEARCH_DEBOUNCE_MS: u32 = 500;

/// Параметры списка с полнотекстовым поиском и сортировкой сервера
pub trait SearchQuery {
    fn search_mut(&mut self) -> &mut Option<String>;

    fn ordering_mut(&mut self) -> &mut Option<String>;
}

macro_rules! impl_search_query {
    ($($query:ty),* $(,)?) => {
        $(
            impl SearchQuery for $query {
                fn search_mut(&mut self) -> &mut Option<String> {
                    &mut self.search
                }

                fn ordering_mut(&mut self) -> &mut Option<String> {
                    &mut self.ordering
                }
            }
        )*
    };
}

impl_search_query!(PartTypeQuery, PartQuery, ClientQuery, RentalQuery, MovementQuery);

/// Следующее значение `ordering` при клике по заголовку колонки
///
/// Тот же столбец меняет направление (`field` <-> `-field`),
/// другой столбец сортируется по возрастанию.
pub fn toggle_ordering(current: Option<&str>, field: &str) -> String {
    match current {
        Some(c) if c == field => format!("-{}", field),
        _ => field.to_string(),
    }
}

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(current: Option<&str>, field: &str) -> &'static str {
    match current {
        Some(c) if c == field => " ▲",
        Some(c) if c.strip_prefix('-') == Some(field) => " ▼",
        _ => " ⇅",
    }
}

/// Поиск по списку с отложенной загрузкой
///
/// Каждое изменение запроса перезапускает таймер; загрузка вызывается один
/// раз с последним состоянием запроса.
pub struct DebouncedSearch<Q, R: TimerRuntime = BrowserRuntime> {
    query: Rc<RefCell<Q>>,
    load: Rc<dyn Fn(Q)>,
    debouncer: Debouncer<R>,
    delay_ms: u32,
}

impl<Q: Clone + 'static> DebouncedSearch<Q, BrowserRuntime> {
    pub fn browser(initial: Q, load: impl Fn(Q) + 'static) -> Self {
        Self::new(BrowserRuntime, initial, load)
    }
}

impl<Q: Clone + 'static, R: TimerRuntime> DebouncedSearch<Q, R> {
    pub fn new(runtime: R, initial: Q, load: impl Fn(Q) + 'static) -> Self {
        Self {
            query: Rc::new(RefCell::new(initial)),
            load: Rc::new(load),
            debouncer: Debouncer::new(runtime),
            delay_ms: SEARCH_DEBOUNCE_MS,
        }
    }

    pub fn with_delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Текущее состояние запроса
    pub fn query(&self) -> Q {
        self.query.borrow().clone()
    }

    /// Изменить запрос и отложить загрузку
    pub fn update(&self, change: impl FnOnce(&mut Q)) {
        change(&mut self.query.borrow_mut());

        let query = Rc::clone(&self.query);
        let load = Rc::clone(&self.load);
        self.debouncer.schedule(self.delay_ms, move || {
            let snapshot = query.borrow().clone();
            load(snapshot);
        });
    }

    /// Загрузить сразу (Enter, смена фильтра-селекта), отменив отложенную
    pub fn flush(&self) {
        self.debouncer.cancel();
        (self.load)(self.query());
    }

    pub fn cancel(&self) {
        self.debouncer.cancel();
    }

    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }
}

impl<Q: SearchQuery + Clone + 'static, R: TimerRuntime> DebouncedSearch<Q, R> {
    /// Текст из поля поиска; пустая строка снимает фильтр
    pub fn set_search(&self, text: &str) {
        let search = normalize_search(text);
        self.update(move |q| *q.search_mut() = search);
    }

    /// Клик по заголовку: сортировка применяется без задержки
    pub fn toggle_sort(&self, field: &str) {
        {
            let mut query = self.query.borrow_mut();
            let next = toggle_ordering(query.ordering_mut().as_deref(), field);
            *query.ordering_mut() = Some(next);
        }
        self.flush();
    }
}

impl<Q: fmt::Debug, R: TimerRuntime> fmt::Debug for DebouncedSearch<Q, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DebouncedSearch")
            .field("query", &self.query.borrow())
            .field("delay_ms", &self.delay_ms)
            .field("pending", &self.debouncer.is_pending())
            .finish()
    }
}
