//! Global CSS styles for the portfolio page.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --bg: #0f172a;
  --bg-raised: #1e293b;
  --bg-overlay: rgba(15, 23, 42, 0.85);
  --border: #334155;

  --accent: #38bdf8;
  --accent-strong: #0ea5e9;
  --accent-soft: rgba(56, 189, 248, 0.15);

  --text-primary: #f1f5f9;
  --text-secondary: #cbd5e1;
  --text-muted: #94a3b8;

  --danger: #f87171;

  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  --radius: 10px;
  --transition: 0.3s ease;
}

/* === Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  height: 100%;
  overflow: hidden;
  background: var(--bg);
  color: var(--text-primary);
  font-family: var(--font-sans);
  line-height: 1.6;
}

/* === Page scroll container === */
.page {
  height: 100vh;
  overflow-y: auto;
  scroll-behavior: smooth;
}

.page.scroll-locked {
  overflow: hidden;
}

.page-main {
  max-width: 1100px;
  margin: 0 auto;
  padding: 0 1.5rem;
}

.page-footer {
  text-align: center;
  padding: 2rem;
  color: var(--text-muted);
  font-size: 0.85rem;
  border-top: 1px solid var(--border);
}

/* === Header === */
.site-header {
  position: sticky;
  top: 0;
  z-index: 50;
  padding: 1.25rem 1.5rem;
  background: transparent;
  transition: background var(--transition), padding var(--transition), box-shadow var(--transition);
}

.site-header.scrolled {
  padding: 0.75rem 1.5rem;
  background: var(--bg-overlay);
  backdrop-filter: blur(8px);
  box-shadow: 0 2px 12px rgba(0, 0, 0, 0.4);
}

.nav {
  display: flex;
  align-items: center;
  justify-content: space-between;
  max-width: 1100px;
  margin: 0 auto;
}

.nav-brand {
  font-weight: 700;
  font-size: 1.2rem;
  color: var(--text-primary);
  text-decoration: none;
}

.nav-links {
  display: flex;
  gap: 1.25rem;
  list-style: none;
}

.nav-link {
  color: var(--text-secondary);
  text-decoration: none;
  transition: color var(--transition);
}

.nav-link:hover {
  color: var(--accent);
}

/* === Sections === */
.section {
  padding: 5rem 0;
}

.section-title {
  font-size: 2rem;
  margin-bottom: 1.5rem;
}

.reveal {
  opacity: 0;
  transform: translateY(30px);
  transition: opacity 0.6s ease, transform 0.6s ease;
}

.reveal.visible {
  opacity: 1;
  transform: translateY(0);
}

/* === Hero === */
.hero {
  min-height: 70vh;
  display: flex;
  flex-direction: column;
  justify-content: center;
  gap: 1rem;
}

.name-title {
  font-size: 3.2rem;
  min-height: 4rem;
}

.name-title.typing::after {
  content: '|';
  margin-left: 2px;
  color: var(--accent);
  animation: blink 1s step-end infinite;
}

@keyframes blink {
  50% { opacity: 0; }
}

.hero-tagline {
  font-size: 1.25rem;
  color: var(--text-secondary);
}

.hero-actions {
  display: flex;
  gap: 1rem;
  margin-top: 1rem;
}

.about-text, .contact-text {
  max-width: 720px;
  color: var(--text-secondary);
  font-size: 1.1rem;
}

/* === Buttons === */
.btn {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.7rem 1.4rem;
  border-radius: var(--radius);
  border: 1px solid transparent;
  font: inherit;
  font-weight: 600;
  cursor: pointer;
  transition: background var(--transition), color var(--transition), border-color var(--transition);
}

.btn:disabled {
  opacity: 0.6;
  cursor: wait;
}

.btn-primary {
  background: var(--accent-strong);
  color: #fff;
}

.btn-primary:hover:not(:disabled) {
  background: var(--accent);
}

.btn-secondary {
  background: transparent;
  border-color: var(--accent);
  color: var(--accent);
}

.btn-secondary:hover {
  background: var(--accent-soft);
}

.btn-ghost {
  background: transparent;
  color: var(--text-secondary);
}

.icon-btn {
  background: none;
  border: none;
  color: var(--text-muted);
  cursor: pointer;
  font-size: 1.75rem;
  line-height: 1;
}

.icon-btn:hover {
  color: var(--text-primary);
}

.trigger {
  cursor: pointer;
}

.spinner {
  width: 1rem;
  height: 1rem;
  border: 2px solid rgba(255, 255, 255, 0.4);
  border-top-color: #fff;
  border-radius: 50%;
  animation: spin 0.8s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

/* === Tags === */
.tag-list {
  display: flex;
  flex-wrap: wrap;
  gap: 0.4rem;
  margin: 0.75rem 0;
}

.tag-chip {
  padding: 0.2rem 0.65rem;
  border-radius: 999px;
  background: var(--accent-soft);
  color: var(--accent);
  font-size: 0.8rem;
  font-family: var(--font-mono);
}

.tag-more {
  background: var(--bg-raised);
  color: var(--text-muted);
}

/* === Skills === */
.skill-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
  gap: 1rem;
  margin-bottom: 1.5rem;
}

.skill-card, .project-card, .plot-thumb {
  background: var(--bg-raised);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 1.25rem;
}

.skill-group + .skill-group {
  margin-top: 1rem;
}

/* === Projects === */
.project-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
  gap: 1.25rem;
}

.project-card {
  transition: transform var(--transition), border-color var(--transition);
}

.project-card:hover {
  transform: translateY(-4px);
  border-color: var(--accent);
}

.project-summary {
  color: var(--text-secondary);
  display: -webkit-box;
  -webkit-line-clamp: 3;
  -webkit-box-orient: vertical;
  overflow: hidden;
}

.card-cta {
  color: var(--accent);
  font-weight: 600;
}

/* === Visualizations === */
.plot-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
  gap: 1.25rem;
}

.plot-image {
  width: 100%;
  border-radius: calc(var(--radius) - 4px);
  background: var(--bg);
}

.plot-caption {
  margin-top: 0.5rem;
  color: var(--text-secondary);
  text-align: center;
}

.plot-actions {
  margin-top: 1.5rem;
  text-align: center;
}

/* === Resume === */
.resume-container {
  display: none;
  margin-top: 1.5rem;
}

.resume-container.visible {
  display: block;
}

.resume-frame {
  width: 100%;
  height: 80vh;
  border: 1px solid var(--border);
  border-radius: var(--radius);
  margin-bottom: 0.75rem;
}

.action-link {
  display: inline-block;
  margin-right: 1rem;
  color: var(--accent);
  text-decoration: none;
  font-weight: 600;
}

.action-link:hover {
  text-decoration: underline;
}

/* === Overlays === */
.modal {
  position: fixed;
  inset: 0;
  z-index: 100;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(0, 0, 0, 0.7);
  animation: fade-in 0.2s ease;
}

.modal-content {
  position: relative;
  width: min(760px, 92vw);
  max-height: 86vh;
  overflow-y: auto;
  padding: 2rem;
  background: var(--bg-raised);
  border: 1px solid var(--border);
  border-radius: var(--radius);
}

.modal-content .close {
  position: absolute;
  top: 0.75rem;
  right: 1rem;
}

.modal-heading, .detail-title {
  margin-bottom: 1rem;
}

.detail-description {
  color: var(--text-secondary);
  margin-bottom: 1rem;
}

.feature-list {
  margin: 0.5rem 0 1rem 1.25rem;
}

.detail-links {
  margin-top: 1rem;
}

.image-content {
  width: min(1000px, 94vw);
}

.modal-image {
  width: 100%;
  border-radius: calc(var(--radius) - 4px);
}

.modal-title {
  margin-top: 0.75rem;
  text-align: center;
}

@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}
"#;
