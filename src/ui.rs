use chrono::NaiveDate;

pub fn render_index(today: NaiveDate) -> String {
    INDEX_HTML.replace("{{TODAY}}", &today.format("%Y-%m-%d").to_string())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Habits</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Inter:wght@400;600;800&display=swap');

    :root {
      --bg: #09090a;
      --card: #18181b;
      --ink: #e1e1e6;
      --muted: #8d8d99;
      --accent: #8b5cf6;
      --accent-soft: rgba(139, 92, 246, 0.25);
      --border: #27272a;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Inter", "Segoe UI", sans-serif;
      display: grid;
      place-items: start center;
      padding: 40px 18px 64px;
    }

    .app {
      width: min(900px, 100%);
      display: grid;
      gap: 28px;
    }

    h1 {
      font-weight: 800;
      font-size: clamp(1.8rem, 4vw, 2.4rem);
      margin: 0;
    }

    .subtitle {
      margin: 4px 0 0;
      color: var(--muted);
    }

    .card {
      background: var(--card);
      border: 1px solid var(--border);
      border-radius: 14px;
      padding: 22px;
    }

    .grid {
      display: grid;
      grid-template-columns: repeat(auto-fill, 34px);
      gap: 8px;
    }

    .cell {
      width: 34px;
      height: 34px;
      border-radius: 8px;
      border: 2px solid var(--border);
      background: var(--card);
      cursor: pointer;
      padding: 0;
    }

    .cell[data-level="1"] { background: #4c1d95; border-color: #5b21b6; }
    .cell[data-level="2"] { background: #6d28d9; border-color: #7c3aed; }
    .cell[data-level="3"] { background: #8b5cf6; border-color: #a78bfa; }

    .cell.today {
      border-color: var(--accent);
      box-shadow: 0 0 0 3px var(--accent-soft);
    }

    .cell:focus-visible {
      outline: 2px solid var(--accent);
      outline-offset: 2px;
    }

    h2 {
      margin: 0 0 12px;
      font-size: 1.1rem;
    }

    .habit-list {
      display: grid;
      gap: 10px;
      margin: 0;
      padding: 0;
      list-style: none;
    }

    .habit-list label {
      display: flex;
      align-items: center;
      gap: 10px;
      font-size: 1rem;
    }

    .habit-list input[type="checkbox"] {
      width: 20px;
      height: 20px;
      accent-color: var(--accent);
    }

    .habit-list .done {
      text-decoration: line-through;
      color: var(--muted);
    }

    form {
      display: grid;
      gap: 14px;
    }

    input[type="text"] {
      background: var(--bg);
      border: 1px solid var(--border);
      border-radius: 8px;
      color: var(--ink);
      padding: 12px 14px;
      font-size: 1rem;
    }

    .weekdays {
      display: flex;
      flex-wrap: wrap;
      gap: 8px;
    }

    .weekdays label {
      border: 1px solid var(--border);
      border-radius: 8px;
      padding: 8px 12px;
      cursor: pointer;
      user-select: none;
      color: var(--muted);
    }

    .weekdays input {
      display: none;
    }

    .weekdays label:has(input:checked) {
      background: var(--accent-soft);
      border-color: var(--accent);
      color: var(--ink);
    }

    button.submit {
      appearance: none;
      border: none;
      border-radius: 8px;
      background: var(--accent);
      color: white;
      font-weight: 600;
      font-size: 1rem;
      padding: 13px;
      cursor: pointer;
    }

    button.submit:active {
      transform: scale(0.99);
    }

    .status {
      min-height: 1.2em;
      font-size: 0.9rem;
      color: var(--muted);
    }

    .status[data-type="error"] {
      color: #f87171;
    }

    .hint {
      margin: 10px 0 0;
      color: var(--muted);
      font-size: 0.85rem;
    }

    @media (max-width: 600px) {
      .grid {
        grid-template-columns: repeat(auto-fill, 28px);
      }
      .cell {
        width: 28px;
        height: 28px;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Habits</h1>
      <p class="subtitle">Daily progress since the start of tracking. Darker squares mean more habits done.</p>
    </header>

    <section class="card">
      <div id="grid" class="grid" aria-label="Progress grid"></div>
      <p class="hint">Click a square to see that day. Only today can be edited.</p>
    </section>

    <section class="card">
      <h2 id="day-title">Today</h2>
      <ul id="day-habits" class="habit-list"></ul>
      <p class="hint" id="day-empty" hidden>No habits scheduled for this day.</p>
    </section>

    <section class="card">
      <h2>New habit</h2>
      <form id="habit-form">
        <input type="text" id="habit-title" placeholder="e.g. Exercise, sleep 8h, read" autocomplete="off" />
        <div class="weekdays" id="weekday-picker"></div>
        <button class="submit" type="submit">Create</button>
      </form>
      <div class="status" id="status"></div>
    </section>
  </main>

  <script>
    const TODAY = '{{TODAY}}';
    const WEEKDAY_NAMES = ['Sun', 'Mon', 'Tue', 'Wed', 'Thu', 'Fri', 'Sat'];

    const gridEl = document.getElementById('grid');
    const dayTitleEl = document.getElementById('day-title');
    const dayHabitsEl = document.getElementById('day-habits');
    const dayEmptyEl = document.getElementById('day-empty');
    const formEl = document.getElementById('habit-form');
    const titleEl = document.getElementById('habit-title');
    const pickerEl = document.getElementById('weekday-picker');
    const statusEl = document.getElementById('status');

    let selectedDate = TODAY;

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const fetchJson = async (url, options) => {
      const res = await fetch(url, options);
      if (!res.ok) {
        throw new Error((await res.text()) || 'Request failed');
      }
      return res.json();
    };

    const levelFor = (entry) => {
      if (!entry || entry.amount === 0 || entry.completed === 0) {
        return 0;
      }
      const ratio = entry.completed / entry.amount;
      if (ratio >= 0.8) return 3;
      if (ratio >= 0.4) return 2;
      return 1;
    };

    const renderGrid = (dates, summary) => {
      const byDate = new Map(summary.map((entry) => [entry.date, entry]));
      gridEl.innerHTML = '';
      for (const date of [...dates, TODAY]) {
        const cell = document.createElement('button');
        cell.className = 'cell';
        cell.type = 'button';
        cell.dataset.date = date;
        cell.dataset.level = String(levelFor(byDate.get(date)));
        cell.title = date;
        if (date === TODAY) {
          cell.classList.add('today');
        }
        cell.addEventListener('click', () => selectDay(date));
        gridEl.appendChild(cell);
      }
    };

    const renderDay = (date, detail) => {
      const editable = date === TODAY;
      dayTitleEl.textContent = editable ? 'Today' : date;
      dayHabitsEl.innerHTML = '';
      dayEmptyEl.hidden = detail.possible_habits.length > 0;

      const completed = new Set(detail.completed_habits);
      for (const habit of detail.possible_habits) {
        const item = document.createElement('li');
        const label = document.createElement('label');
        const box = document.createElement('input');
        box.type = 'checkbox';
        box.checked = completed.has(habit.id);
        box.disabled = !editable;
        box.addEventListener('change', () => toggle(habit.id));
        const text = document.createElement('span');
        text.textContent = habit.title;
        if (box.checked) {
          text.classList.add('done');
        }
        label.append(box, text);
        item.appendChild(label);
        dayHabitsEl.appendChild(item);
      }
    };

    const loadGrid = async () => {
      const [dates, summary] = await Promise.all([
        fetchJson('/api/calendar'),
        fetchJson('/api/summary')
      ]);
      renderGrid(dates, summary);
    };

    const selectDay = async (date) => {
      selectedDate = date;
      const detail = await fetchJson(`/api/day?date=${date}`);
      renderDay(date, detail);
    };

    const toggle = async (habitId) => {
      try {
        await fetchJson(`/api/habits/${habitId}/toggle`, { method: 'PATCH' });
        await Promise.all([loadGrid(), selectDay(selectedDate)]);
      } catch (err) {
        setStatus(err.message, 'error');
      }
    };

    pickerEl.innerHTML = WEEKDAY_NAMES
      .map((name, index) => `<label><input type="checkbox" value="${index}" />${name}</label>`)
      .join('');

    formEl.addEventListener('submit', async (event) => {
      event.preventDefault();
      const week_days = Array.from(pickerEl.querySelectorAll('input:checked'))
        .map((input) => Number(input.value));
      try {
        await fetchJson('/api/habits', {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify({ title: titleEl.value, week_days })
        });
        titleEl.value = '';
        pickerEl.querySelectorAll('input').forEach((input) => { input.checked = false; });
        setStatus('Habit created', 'ok');
        setTimeout(() => setStatus('', ''), 1500);
        await Promise.all([loadGrid(), selectDay(selectedDate)]);
      } catch (err) {
        setStatus(err.message, 'error');
      }
    });

    Promise.all([loadGrid(), selectDay(TODAY)])
      .catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_index_injects_today() {
        let page = render_index(NaiveDate::from_ymd_opt(2023, 7, 25).unwrap());
        assert!(page.contains("const TODAY = '2023-07-25'"));
        assert!(!page.contains("{{TODAY}}"));
    }
}
