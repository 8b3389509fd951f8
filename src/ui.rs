use crate::models::DashboardView;

pub fn render_index(view: &DashboardView) -> String {
    // `<` is escaped so the embedded JSON cannot close the script tag.
    let initial = serde_json::to_string(view)
        .unwrap_or_else(|_| "null".to_string())
        .replace('<', "\\u003c");
    let theme = if view.is_dark_mode { "dark" } else { "" };
    INDEX_HTML
        .replace("{{THEME}}", theme)
        .replace("{{DATE}}", &view.date.to_string())
        .replace("{{STREAK}}", &view.streak.current_streak.to_string())
        .replace("{{INITIAL_STATE}}", &initial)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en" class="{{THEME}}">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Creator Dashboard</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --muted: #6b645d;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --gold: #d99a1e;
      --card: rgba(255, 255, 255, 0.86);
      --panel: white;
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    html.dark {
      --bg-1: #14161b;
      --bg-2: #2a2231;
      --ink: #f1ede6;
      --muted: #a59f96;
      --card: rgba(28, 30, 38, 0.88);
      --panel: #23262f;
      --shadow: 0 24px 60px rgba(0, 0, 0, 0.45);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), var(--bg-2) 140%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(1100px, 100%);
      margin: 0 auto;
      display: grid;
      gap: 24px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-wrap: wrap;
      justify-content: space-between;
      align-items: flex-end;
      gap: 12px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
    }

    h2 {
      margin: 0 0 12px;
      font-size: 1.15rem;
    }

    .subtitle {
      margin: 4px 0 0;
      color: var(--muted);
    }

    .grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
      gap: 20px;
    }

    .card {
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 24px;
      box-shadow: var(--shadow);
      padding: 24px;
    }

    .platform {
      background: var(--panel);
      border-radius: 16px;
      padding: 14px;
      margin-bottom: 12px;
      display: grid;
      grid-template-columns: 1fr 1fr auto;
      gap: 10px;
      align-items: end;
    }

    .platform h3 {
      grid-column: 1 / -1;
      margin: 0;
      font-size: 0.95rem;
    }

    label {
      display: grid;
      gap: 4px;
      font-size: 0.8rem;
      color: var(--muted);
    }

    input[type="text"], input[type="number"], textarea, select {
      width: 100%;
      border-radius: 10px;
      border: 1px solid rgba(47, 72, 88, 0.2);
      padding: 8px 10px;
      font: inherit;
      background: var(--panel);
      color: var(--ink);
    }

    .growth {
      font-weight: 600;
      color: var(--accent-2);
      min-width: 70px;
      text-align: right;
    }

    html.dark .growth {
      color: #8fd3ff;
    }

    .task-group {
      margin-bottom: 14px;
    }

    .task-group h3 {
      margin: 0 0 6px;
      font-size: 0.95rem;
    }

    .task {
      display: flex;
      gap: 10px;
      align-items: center;
      padding: 6px 0;
      cursor: pointer;
    }

    .progress {
      height: 10px;
      border-radius: 999px;
      background: rgba(47, 72, 88, 0.12);
      overflow: hidden;
      margin-top: 8px;
    }

    .progress > div {
      height: 100%;
      background: linear-gradient(90deg, var(--accent), var(--gold));
      transition: width 300ms ease;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 18px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      transition: transform 150ms ease, box-shadow 150ms ease;
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(255, 107, 74, 0.3);
    }

    button.secondary {
      background: var(--accent-2);
      box-shadow: 0 10px 24px rgba(47, 72, 88, 0.3);
    }

    button:active {
      transform: scale(0.98);
    }

    .big {
      font-size: 2.4rem;
      font-weight: 600;
      margin: 0;
    }

    .badge {
      display: flex;
      justify-content: space-between;
      padding: 10px 14px;
      border-radius: 14px;
      margin-bottom: 8px;
      background: var(--panel);
      color: var(--muted);
    }

    .badge.unlocked {
      background: linear-gradient(90deg, #ffe9b8, #fff4d6);
      color: #7a4d00;
      font-weight: 600;
    }

    .moods {
      display: flex;
      flex-wrap: wrap;
      gap: 8px;
    }

    .moods button {
      padding: 8px 12px;
      font-size: 1.3rem;
      background: var(--panel);
      box-shadow: none;
    }

    .moods button.active {
      outline: 2px solid var(--accent);
    }

    .row {
      display: flex;
      justify-content: space-between;
      align-items: center;
      gap: 12px;
      margin-top: 10px;
    }

    blockquote {
      margin: 0;
      font-style: italic;
      color: var(--muted);
    }

    .history {
      display: flex;
      flex-wrap: wrap;
      gap: 4px;
      margin-top: 10px;
    }

    .history span {
      width: 14px;
      height: 14px;
      border-radius: 4px;
      background: var(--gold);
    }

    .status {
      min-height: 20px;
      font-size: 0.9rem;
      color: var(--muted);
    }

    .status.error {
      color: #b3261e;
    }

    .status.ok {
      color: #1f7a4d;
    }

    .toast {
      position: fixed;
      right: 24px;
      bottom: 24px;
      max-width: 360px;
      background: var(--accent-2);
      color: white;
      padding: 16px 20px;
      border-radius: 16px;
      box-shadow: var(--shadow);
      display: none;
    }

    .toast.show {
      display: block;
    }

    .modal {
      position: fixed;
      inset: 0;
      background: rgba(0, 0, 0, 0.5);
      display: none;
      place-items: center;
      padding: 16px;
    }

    .modal.show {
      display: grid;
    }

    .modal .card {
      width: min(560px, 100%);
    }

    .modal .platform {
      grid-template-columns: 1fr 1fr;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(12px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <div>
        <h1>Creator Dashboard</h1>
        <p class="subtitle"><span id="date">{{DATE}}</span> &middot; <span id="clock"></span></p>
      </div>
      <div class="row">
        <label>Dark mode <input type="checkbox" id="dark-mode" /></label>
        <button class="secondary" id="edit-baseline" type="button">Edit baseline</button>
      </div>
    </header>

    <p class="status" id="status"></p>

    <section class="grid">
      <div class="card">
        <h2>Platform stats</h2>
        <div id="stats"></div>
      </div>

      <div class="card">
        <h2>Daily checklist</h2>
        <div id="checklist"></div>
        <div class="row">
          <label>Facebook auto-sync <input type="checkbox" id="fb-auto-sync" /></label>
        </div>
        <div class="row">
          <span id="completion"></span>
        </div>
        <div class="progress"><div id="progress" style="width: 0%"></div></div>
      </div>

      <div class="card">
        <h2>Streak</h2>
        <p class="big"><span id="streak">{{STREAK}}</span> days</p>
        <p class="subtitle" id="last-check-in"></p>
        <div class="history" id="history"></div>
        <div class="row">
          <button id="sync" type="button">Sync today</button>
        </div>
      </div>

      <div class="card">
        <h2>Next posting window</h2>
        <p class="big" id="countdown"></p>
        <p class="subtitle">Daily batch posting at <span id="posting-time"></span></p>
      </div>

      <div class="card">
        <h2>Achievements</h2>
        <div id="badges"></div>
      </div>

      <div class="card">
        <h2>Mood of the day</h2>
        <div class="moods" id="moods"></div>
        <p class="subtitle" id="mood-label"></p>
        <h2 style="margin-top: 18px">Win of the day</h2>
        <textarea id="win" rows="3" placeholder="What went well today?"></textarea>
      </div>

      <div class="card">
        <h2>Daily motivation</h2>
        <blockquote id="quote"></blockquote>
      </div>
    </section>
  </main>

  <div class="modal" id="baseline-modal">
    <form class="card" id="baseline-form">
      <h2>Set your starting stats</h2>
      <p class="subtitle">Growth is calculated against these numbers.</p>
      <div id="baseline-fields"></div>
      <div class="row">
        <button class="secondary" type="button" id="baseline-cancel">Cancel</button>
        <button type="submit">Save baseline</button>
      </div>
    </form>
  </div>

  <div class="toast" id="toast"></div>

  <script>
    const PLATFORMS = [
      ['youtube', 'YouTube'],
      ['instagram', 'Instagram'],
      ['linkedin', 'LinkedIn']
    ];
    const SOUND_URL = 'https://assets.mixkit.co/active_storage/sfx/2869/2869-preview.mp3';

    let view = {{INITIAL_STATE}};
    const statusEl = document.getElementById('status');

    const setStatus = (message, tone) => {
      statusEl.textContent = message;
      statusEl.className = `status ${tone || ''}`;
    };

    const request = async (method, url, body) => {
      const res = await fetch(url, {
        method,
        headers: { 'content-type': 'application/json' },
        body: body === undefined ? undefined : JSON.stringify(body)
      });
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      return res.json();
    };

    const el = (tag, props = {}, children = []) => {
      const node = document.createElement(tag);
      Object.assign(node, props);
      children.forEach((child) => node.append(child));
      return node;
    };

    const renderStats = () => {
      const root = document.getElementById('stats');
      root.replaceChildren();
      PLATFORMS.forEach(([key, label]) => {
        const stat = view.socialStats[key];
        const field = (name) => {
          const input = el('input', { type: 'text', value: stat[name], placeholder: '0' });
          input.addEventListener('change', () => {
            mutate('PUT', '/api/stats', { platform: key, field: name, value: input.value });
          });
          return el('label', {}, [name, input]);
        };
        const growth = el('span', { className: 'growth', textContent: `${stat.growth || '0'}%` });
        root.append(el('div', { className: 'platform' }, [
          el('h3', { textContent: label }),
          field('followers'),
          field('views'),
          growth
        ]));
      });
    };

    const renderChecklist = () => {
      const root = document.getElementById('checklist');
      root.replaceChildren();
      view.checklist.forEach((group) => {
        const tasks = group.tasks.map((task, index) => {
          const box = el('input', { type: 'checkbox', checked: task.done });
          box.addEventListener('change', () => {
            mutate('POST', '/api/checklist/toggle', { category: group.category, index });
          });
          return el('label', { className: 'task' }, [box, task.label]);
        });
        root.append(el('div', { className: 'task-group' }, [el('h3', { textContent: group.label }), ...tasks]));
      });
      const { completed, total, percent } = view.completion;
      document.getElementById('completion').textContent = `${completed}/${total} tasks complete`;
      document.getElementById('progress').style.width = `${percent}%`;
      document.getElementById('fb-auto-sync').checked = view.fbAutoSync;
    };

    const renderStreak = () => {
      const streak = view.streak;
      document.getElementById('streak').textContent = streak.currentStreak;
      document.getElementById('last-check-in').textContent = streak.lastCheckIn
        ? `Last check-in ${streak.lastCheckIn}${streak.syncedToday ? ' (today)' : ''}`
        : 'No check-ins yet';
      const history = document.getElementById('history');
      history.replaceChildren(...streak.history.slice(-60).map((date) => el('span', { title: date })));
      document.getElementById('sync').disabled = streak.syncedToday;
    };

    const renderBadges = () => {
      const root = document.getElementById('badges');
      root.replaceChildren(...view.badges.map((badge) => el('div', {
        className: `badge ${badge.unlocked ? 'unlocked' : ''}`
      }, [
        el('span', { textContent: `🏆 ${badge.label}` }),
        el('span', { textContent: badge.unlocked ? 'Unlocked' : `${badge.threshold} days` })
      ])));
    };

    const renderMood = () => {
      const root = document.getElementById('moods');
      root.replaceChildren(...view.moods.map((mood, index) => {
        const active = mood.emoji === view.selectedMood.emoji && mood.label === view.selectedMood.label;
        const button = el('button', {
          type: 'button',
          className: active ? 'active' : '',
          textContent: mood.emoji,
          title: mood.label
        });
        button.addEventListener('click', () => mutate('PUT', '/api/mood', { index }));
        return button;
      }));
      document.getElementById('mood-label').textContent = `${view.selectedMood.emoji} ${view.selectedMood.label}`;
      const win = document.getElementById('win');
      if (document.activeElement !== win) {
        win.value = view.winOfTheDay;
      }
    };

    const renderBaselineForm = () => {
      const root = document.getElementById('baseline-fields');
      root.replaceChildren();
      PLATFORMS.forEach(([key, label]) => {
        const base = view.baseline ? view.baseline[key] : { followers: '', views: '' };
        root.append(el('div', { className: 'platform' }, [
          el('h3', { textContent: label }),
          el('label', {}, ['Followers', el('input', { type: 'number', name: `${key}.followers`, value: base.followers, placeholder: '0' })]),
          el('label', {}, ['Views', el('input', { type: 'number', name: `${key}.views`, value: base.views, placeholder: '0' })])
        ]));
      });
    };

    const showBaseline = (show) => {
      if (show) {
        renderBaselineForm();
      }
      document.getElementById('baseline-modal').classList.toggle('show', show);
    };

    const render = () => {
      document.documentElement.classList.toggle('dark', view.isDarkMode);
      document.getElementById('dark-mode').checked = view.isDarkMode;
      document.getElementById('date').textContent = view.date;
      document.getElementById('posting-time').textContent = view.postingTime;
      document.getElementById('countdown').textContent = view.countdown;
      document.getElementById('quote').textContent = `"${view.quote.text}" (${view.quote.author})`;
      renderStats();
      renderChecklist();
      renderStreak();
      renderBadges();
      renderMood();
      if (view.needsBaseline) {
        showBaseline(true);
      }
    };

    const mutate = async (method, url, body) => {
      try {
        view = await request(method, url, body);
        render();
        setStatus('Saved', 'ok');
        setTimeout(() => setStatus('', ''), 1200);
      } catch (err) {
        setStatus(err.message, 'error');
      }
    };

    const showToast = (title, body, durationMs) => {
      const toast = document.getElementById('toast');
      toast.replaceChildren(el('strong', { textContent: title }), el('div', { textContent: body }));
      toast.classList.add('show');
      setTimeout(() => toast.classList.remove('show'), durationMs);
    };

    const playSound = () => {
      try {
        const audio = new Audio(SOUND_URL);
        audio.volume = 0.5;
        audio.play().catch((err) => console.log('audio playback failed:', err));
      } catch (err) {
        console.log('audio playback failed:', err);
      }
    };

    const poll = async () => {
      try {
        const countdown = await request('GET', '/api/countdown');
        document.getElementById('countdown').textContent = countdown.remaining;
        document.getElementById('clock').textContent = countdown.now;
        const notifications = await request('GET', '/api/notifications');
        notifications.forEach((n) => {
          showToast(n.title, n.body, n.durationMs);
          playSound();
        });
        if (countdown.now.startsWith('00:00:0')) {
          view = await request('GET', '/api/dashboard');
          render();
        }
      } catch (err) {
        setStatus(err.message, 'error');
      }
    };

    document.getElementById('sync').addEventListener('click', async () => {
      try {
        const receipt = await request('POST', '/api/sync');
        alert(receipt.message);
        view = await request('GET', '/api/dashboard');
        render();
      } catch (err) {
        alert(err.message);
      }
    });

    document.getElementById('dark-mode').addEventListener('change', (event) => {
      mutate('PUT', '/api/preferences', { darkMode: event.target.checked });
    });

    document.getElementById('fb-auto-sync').addEventListener('change', (event) => {
      mutate('PUT', '/api/preferences', { fbAutoSync: event.target.checked });
    });

    document.getElementById('win').addEventListener('change', (event) => {
      mutate('PUT', '/api/win', { text: event.target.value });
    });

    document.getElementById('edit-baseline').addEventListener('click', () => showBaseline(true));
    document.getElementById('baseline-cancel').addEventListener('click', () => showBaseline(false));

    document.getElementById('baseline-form').addEventListener('submit', async (event) => {
      event.preventDefault();
      const form = new FormData(event.target);
      const body = {};
      PLATFORMS.forEach(([key]) => {
        body[key] = {
          followers: String(form.get(`${key}.followers`) || ''),
          views: String(form.get(`${key}.views`) || '')
        };
      });
      await mutate('PUT', '/api/baseline', body);
      if (!view.needsBaseline) {
        showBaseline(false);
      }
    });

    if (view) {
      render();
    }
    poll();
    setInterval(poll, 1000);
  </script>
</body>
</html>
"#;
