use super::HistoricalEvent;

static BUILTIN_EVENTS: [HistoricalEvent; 8] = [
    HistoricalEvent {
        id: 1,
        date: "9 мая",
        year: 1945,
        title: "День Победы",
        description: "Окончание Великой Отечественной войны. Подписание акта о безоговорочной капитуляции нацистской Германии.",
        category: "Военная история",
        era: "XX век",
    },
    HistoricalEvent {
        id: 2,
        date: "12 апреля",
        year: 1961,
        title: "Полёт Юрия Гагарина",
        description: "Первый полёт человека в космос. Юрий Гагарин совершил орбитальный полёт вокруг Земли на корабле \"Восток-1\".",
        category: "Космонавтика",
        era: "XX век",
    },
    HistoricalEvent {
        id: 3,
        date: "7 ноября",
        year: 1917,
        title: "Октябрьская революция",
        description: "Вооружённое восстание в Петрограде. Свержение Временного правительства и приход к власти большевиков.",
        category: "Политика",
        era: "XX век",
    },
    HistoricalEvent {
        id: 4,
        date: "21 сентября",
        year: 1380,
        title: "Куликовская битва",
        description: "Сражение между объединённым русским войском и войском Золотой Орды. Важная веха в освобождении Руси от монгольского ига.",
        category: "Военная история",
        era: "Средневековье",
    },
    HistoricalEvent {
        id: 5,
        date: "26 августа",
        year: 1812,
        title: "Бородинское сражение",
        description: "Крупнейшее сражение Отечественной войны 1812 года между русской и французской армиями.",
        category: "Военная история",
        era: "XIX век",
    },
    HistoricalEvent {
        id: 6,
        date: "22 января",
        year: 1905,
        title: "Кровавое воскресенье",
        description: "Расстрел мирного шествия рабочих к Зимнему дворцу в Санкт-Петербурге. Начало первой русской революции.",
        category: "Политика",
        era: "XX век",
    },
    HistoricalEvent {
        id: 7,
        date: "14 декабря",
        year: 1825,
        title: "Восстание декабристов",
        description: "Вооружённое выступление русских революционеров на Сенатской площади в Санкт-Петербурге.",
        category: "Политика",
        era: "XIX век",
    },
    HistoricalEvent {
        id: 8,
        date: "2 марта",
        year: 1861,
        title: "Отмена крепостного права",
        description: "Император Александр II подписал Манифест об отмене крепостного права, освободив миллионы крестьян.",
        category: "Социальные реформы",
        era: "XIX век",
    },
];

/// Read-only, ordered collection of every event the app knows about.
///
/// The order is declaration order (grouped by topic), which is what the
/// timeline shows before the first search.
#[derive(Debug, Clone, Copy)]
pub struct EventStore {
    events: &'static [HistoricalEvent],
}

impl EventStore {
    pub fn new(events: &'static [HistoricalEvent]) -> Self {
        Self { events }
    }

    pub fn builtin() -> Self {
        Self::new(&BUILTIN_EVENTS)
    }

    pub fn events(&self) -> &'static [HistoricalEvent] {
        self.events
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static HistoricalEvent> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&'static HistoricalEvent> {
        self.events.iter().find(|e| e.id == id)
    }
}

impl Default for EventStore {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn builtin_store_has_eight_events_with_unique_ids() {
        let store = EventStore::builtin();
        assert_eq!(store.len(), 8);

        let ids: HashSet<u32> = store.iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), store.len());
    }

    #[test]
    fn builtin_store_keeps_declaration_order() {
        let ids: Vec<u32> = EventStore::builtin().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn builtin_events_have_text() {
        for event in EventStore::builtin().iter() {
            assert!(!event.title.is_empty(), "event {} has no title", event.id);
            assert!(!event.description.is_empty(), "event {} has no description", event.id);
        }
    }

    #[test]
    fn get_by_id() {
        let store = EventStore::builtin();
        assert_eq!(store.get(2).map(|e| e.year), Some(1961));
        assert!(store.get(42).is_none());
    }
}
